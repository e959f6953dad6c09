use std::io::Write;
use std::num::NonZeroUsize;
use std::time::Instant;

use tracing::info;

use crate::config::ViewSetupError;
use crate::controllers::frame_loop::FrameLoopError;
use crate::controllers::ports::pixel_sink::PixelSink;
use crate::core::actions::render_frame::{FrameRenderer, RenderStrategy};
use crate::core::data::complex::Complex;
use crate::core::data::iteration_budget::IterationBudget;
use crate::core::data::screen_size::ScreenSize;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::Precision;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::presenters::terminal::text::TextPresenter;

pub const TEXT_WIDTH: u32 = 40;
pub const TEXT_HEIGHT: u32 = 22;
pub const TEXT_SCALE: f64 = 0.07;
pub const TEXT_CENTRE: Complex = Complex::new(-0.5, 0.0);
pub const TEXT_ITERATIONS: u32 = 256;

/// Renders a single fully-iterated text frame of the whole set into `out`.
pub fn terminal_controller<W: Write>(out: W) -> Result<(), FrameLoopError> {
    let screen = ScreenSize::new(TEXT_WIDTH, TEXT_HEIGHT).map_err(ViewSetupError::from)?;
    let viewport =
        Viewport::centred(screen, TEXT_CENTRE, TEXT_SCALE).map_err(ViewSetupError::from)?;
    let fractal = MandelbrotConfig {
        max_iterations: TEXT_ITERATIONS,
        precision: Precision::Single,
        ..MandelbrotConfig::default()
    };
    let renderer = FrameRenderer::new(RenderStrategy::Serial, NonZeroUsize::new(1))?;

    let start = Instant::now();
    let buffer = renderer.render_frame(
        viewport,
        IterationBudget::with_current(TEXT_ITERATIONS, TEXT_ITERATIONS),
        &fractal,
        &fractal.build_colour_map(),
    )?;
    info!(elapsed_us = start.elapsed().as_micros() as u64, "rendered text frame");

    TextPresenter::new(out)
        .present(&buffer)
        .map_err(|err| FrameLoopError::Present(Box::new(err)))
}
