use std::hint::black_box;
use std::num::NonZeroUsize;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mandelbrot_viewer::core::actions::render_frame::{FrameRenderer, RenderStrategy};
use mandelbrot_viewer::core::data::complex::Complex;
use mandelbrot_viewer::core::data::iteration_budget::IterationBudget;
use mandelbrot_viewer::core::data::screen_size::ScreenSize;
use mandelbrot_viewer::core::data::viewport::Viewport;
use mandelbrot_viewer::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;

fn render_strategies(c: &mut Criterion) {
    let screen = ScreenSize::new(400, 300).unwrap();
    let viewport = Viewport::centred(screen, Complex::new(-0.5, 0.0), 3.0 / 300.0).unwrap();
    let fractal = MandelbrotConfig::default();
    let colour_map = fractal.build_colour_map();
    let budget = IterationBudget::with_current(fractal.max_iterations, fractal.max_iterations);

    let mut group = c.benchmark_group("render_frame");
    for &strategy in RenderStrategy::ALL {
        let renderer = FrameRenderer::new(strategy, NonZeroUsize::new(4)).unwrap();

        group.bench_with_input(
            BenchmarkId::from_parameter(strategy.display_name()),
            &renderer,
            |b, renderer| {
                b.iter(|| {
                    renderer
                        .render_frame(black_box(viewport), budget, &fractal, &colour_map)
                        .unwrap()
                });
            },
        );
    }
    group.finish();
}

criterion_group!(benches, render_strategies);
criterion_main!(benches);
