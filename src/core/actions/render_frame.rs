use std::num::{NonZeroU32, NonZeroUsize};
use std::str::FromStr;
use std::time::Instant;

use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};
use thiserror::Error;
use tracing::debug;

use crate::core::actions::generate_fractal::{
    generate_fractal::generate_fractal,
    generate_fractal_parallel_scoped_threads::generate_fractal_parallel_scoped_threads,
    generate_fractal_rayon::generate_fractal_rayon,
};
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::iteration_budget::IterationBudget;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;

#[derive(Debug, Error)]
pub enum RenderFrameError {
    #[error("viewport error: {0}")]
    Viewport(#[from] ViewportError),
    #[error("pixel buffer error: {0}")]
    PixelBuffer(#[from] PixelBufferError),
    #[error("failed to build render thread pool: {0}")]
    ThreadPool(#[from] ThreadPoolBuildError),
}

/// How the per-pixel work is spread over threads. All strategies produce
/// identical buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStrategy {
    Serial,
    /// Row tasks on a dedicated rayon pool.
    #[default]
    Pool,
    /// One scoped thread per horizontal band.
    ScopedThreads,
}

impl RenderStrategy {
    pub const ALL: &'static [Self] = &[Self::Pool, Self::Serial, Self::ScopedThreads];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Serial => "serial",
            Self::Pool => "pool",
            Self::ScopedThreads => "scoped",
        }
    }
}

impl FromStr for RenderStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|strategy| strategy.display_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("expected serial, pool or scoped, got '{s}'"))
    }
}

/// Owns the worker pool and turns a viewport plus budget into a coloured
/// frame.
#[derive(Debug)]
pub struct FrameRenderer {
    strategy: RenderStrategy,
    pool: Option<ThreadPool>,
    max_threads: NonZeroU32,
}

impl FrameRenderer {
    /// `threads` of `None` uses every available core.
    pub fn new(
        strategy: RenderStrategy,
        threads: Option<NonZeroUsize>,
    ) -> Result<Self, RenderFrameError> {
        let threads = threads
            .or_else(|| std::thread::available_parallelism().ok())
            .unwrap_or(NonZeroUsize::MIN);

        let pool = match strategy {
            RenderStrategy::Pool => Some(
                ThreadPoolBuilder::new()
                    .num_threads(threads.get())
                    .thread_name(|i| format!("render-{i}"))
                    .build()?,
            ),
            RenderStrategy::Serial | RenderStrategy::ScopedThreads => None,
        };

        let max_threads = NonZeroU32::new(u32::try_from(threads.get()).unwrap_or(u32::MAX))
            .unwrap_or(NonZeroU32::MIN);

        debug!(
            strategy = strategy.display_name(),
            threads = threads.get(),
            "frame renderer ready"
        );

        Ok(Self {
            strategy,
            pool,
            max_threads,
        })
    }

    pub fn render_frame<CMap: ColourMap + ?Sized>(
        &self,
        viewport: Viewport,
        budget: IterationBudget,
        fractal: &MandelbrotConfig,
        colour_map: &CMap,
    ) -> Result<PixelBuffer, RenderFrameError> {
        let started = Instant::now();
        let screen = viewport.screen();
        let algorithm = fractal.build_algorithm(viewport, budget);

        let iterations = match (&self.pool, self.strategy) {
            (Some(pool), _) => pool.install(|| generate_fractal_rayon(screen, &algorithm))?,
            (None, RenderStrategy::ScopedThreads) => {
                generate_fractal_parallel_scoped_threads(screen, &algorithm, self.max_threads)?
            }
            (None, _) => generate_fractal(screen, &algorithm)?,
        };

        let buffer = generate_pixel_buffer(&iterations, budget.current(), colour_map, screen)?;

        debug!(
            budget = budget.current(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "rendered frame"
        );

        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::complex::Complex;
    use crate::core::data::point::Point;
    use crate::core::data::screen_size::ScreenSize;
    use crate::core::fractals::mandelbrot::algorithm::Precision;
    use crate::core::fractals::mandelbrot::colour_maps::ultra::MandelbrotUltraPalette;
    use crate::core::fractals::mandelbrot::mandelbrot_config::default_region;

    fn viewport() -> Viewport {
        Viewport::centred(ScreenSize::new(64, 48).unwrap(), Complex::new(-0.5, 0.0), 3.0 / 48.0)
            .unwrap()
    }

    fn render(
        strategy: RenderStrategy,
        threads: usize,
        viewport: Viewport,
        budget: u32,
    ) -> PixelBuffer {
        let renderer = FrameRenderer::new(strategy, NonZeroUsize::new(threads)).unwrap();

        renderer
            .render_frame(
                viewport,
                IterationBudget::with_current(budget, 255),
                &MandelbrotConfig::default(),
                &MandelbrotUltraPalette,
            )
            .unwrap()
    }

    #[test]
    fn test_all_strategies_are_byte_identical() {
        let serial = render(RenderStrategy::Serial, 1, viewport(), 60);

        for &strategy in RenderStrategy::ALL {
            for threads in [1, 2, 3, 7] {
                assert_eq!(render(strategy, threads, viewport(), 60), serial);
            }
        }
    }

    #[test]
    fn test_rendering_twice_is_identical() {
        let first = render(RenderStrategy::Pool, 4, viewport(), 100);
        let second = render(RenderStrategy::Pool, 4, viewport(), 100);

        assert_eq!(first, second);
    }

    #[test]
    fn test_bounding_box_projection_renders() {
        let screen = ScreenSize::new(30, 20).unwrap();
        let viewport = Viewport::bounding_box(screen, default_region().unwrap());

        let serial = render(RenderStrategy::Serial, 1, viewport, 50);
        let scoped = render(RenderStrategy::ScopedThreads, 4, viewport, 50);

        assert_eq!(serial, scoped);
        // (-2, -1) escapes on the first iteration
        assert_eq!(serial.pixel(Point { x: 0, y: 0 }).unwrap(), MandelbrotUltraPalette.map(1));
    }

    #[test]
    fn test_interior_is_background_and_exterior_is_coloured() {
        let buffer = render(RenderStrategy::Pool, 2, viewport(), 255);

        assert_eq!(buffer.pixel(Point { x: 32, y: 24 }).unwrap(), Colour::BACKGROUND);
        assert_ne!(buffer.pixel(Point { x: 0, y: 0 }).unwrap(), Colour::BACKGROUND);
    }

    #[test]
    fn test_first_budget_step_is_all_background() {
        let buffer = render(RenderStrategy::Serial, 1, viewport(), 1);

        assert!(buffer.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn test_single_precision_renders() {
        let mut config = MandelbrotConfig::default();
        config.precision = Precision::Single;
        let renderer = FrameRenderer::new(RenderStrategy::Serial, None).unwrap();

        let buffer = renderer
            .render_frame(
                viewport(),
                IterationBudget::with_current(255, 255),
                &config,
                &MandelbrotUltraPalette,
            )
            .unwrap();

        assert_eq!(buffer.pixel(Point { x: 32, y: 24 }).unwrap(), Colour::BACKGROUND);
    }

    #[test]
    fn test_strategy_from_str() {
        assert_eq!("scoped".parse(), Ok(RenderStrategy::ScopedThreads));
        assert_eq!("POOL".parse(), Ok(RenderStrategy::Pool));
        assert!("gpu".parse::<RenderStrategy>().is_err());
    }
}
