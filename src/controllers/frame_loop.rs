use std::error::Error;

use thiserror::Error;
use tracing::info;

use crate::config::{AppConfig, ViewSetupError};
use crate::controllers::interactive::{InputEvent, InteractionController, InteractionSettings};
use crate::controllers::ports::pixel_sink::PixelSink;
use crate::controllers::ports::uniform_sink::UniformSink;
use crate::core::actions::render_frame::{FrameRenderer, RenderFrameError};
use crate::core::animation::controller::{AnimationController, ZoomBudgetMode};
use crate::core::data::iteration_budget::IterationBudget;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::shader_uniforms::{ShaderUniforms, UniformsError};
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;

#[derive(Debug, Error)]
pub enum FrameLoopError {
    #[error("can't set up the view: {0}")]
    Setup(#[from] ViewSetupError),
    #[error("render failed: {0}")]
    Render(#[from] RenderFrameError),
    #[error("can't build shader uniforms: {0}")]
    Uniforms(#[from] UniformsError),
    #[error("presentation failed: {0}")]
    Present(#[source] Box<dyn Error + Send + Sync>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    Continue,
    Quit,
}

/// Owns all per-session state: poll events, advance, render, present.
pub struct FrameLoop {
    viewport: Viewport,
    fractal: MandelbrotConfig,
    colour_map: Box<dyn MandelbrotColourMap>,
    animation: AnimationController,
    interaction: InteractionController,
    renderer: FrameRenderer,
    frames_rendered: u64,
}

impl FrameLoop {
    pub fn from_config(config: &AppConfig) -> Result<Self, FrameLoopError> {
        let viewport = config.initial_viewport()?;
        let renderer = FrameRenderer::new(config.parallelism, config.threads)?;

        info!(
            width = viewport.screen().width(),
            height = viewport.screen().height(),
            max_iterations = config.fractal.max_iterations,
            palette = config.fractal.colour_map_kind.display_name(),
            strategy = config.parallelism.display_name(),
            "starting frame loop"
        );

        Ok(Self::new(
            viewport,
            config.fractal,
            config.interaction,
            config.zoom_budget,
            renderer,
        ))
    }

    #[must_use]
    pub fn new(
        viewport: Viewport,
        fractal: MandelbrotConfig,
        interaction: InteractionSettings,
        zoom_budget: ZoomBudgetMode,
        renderer: FrameRenderer,
    ) -> Self {
        Self {
            viewport,
            colour_map: fractal.build_colour_map(),
            animation: AnimationController::new(fractal.max_iterations, zoom_budget),
            fractal,
            interaction: InteractionController::new(interaction),
            renderer,
            frames_rendered: 0,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn budget(&self) -> IterationBudget {
        self.animation.budget()
    }

    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Applies pending input, then advances the iteration budget. Once quit
    /// has been requested nothing else changes.
    pub fn update(&mut self, events: &[InputEvent]) -> FrameStatus {
        let outcome = self.interaction.apply_all(&mut self.viewport, events);
        if self.interaction.quit_requested() {
            return FrameStatus::Quit;
        }

        if outcome.zoomed {
            self.animation.on_zoom();
        }
        self.animation.advance();

        FrameStatus::Continue
    }

    pub fn render(&self) -> Result<PixelBuffer, FrameLoopError> {
        Ok(self.renderer.render_frame(
            self.viewport,
            self.animation.budget(),
            &self.fractal,
            &self.colour_map,
        )?)
    }

    pub fn uniforms(&self) -> Result<ShaderUniforms, FrameLoopError> {
        Ok(ShaderUniforms::from_frame(
            &self.viewport,
            self.animation.budget(),
            self.fractal.threshold,
        )?)
    }

    /// One software-rendered frame. Returns `Quit` without rendering when
    /// the events asked to stop.
    pub fn step<S: PixelSink>(
        &mut self,
        events: &[InputEvent],
        sink: &mut S,
    ) -> Result<FrameStatus, FrameLoopError> {
        if self.update(events) == FrameStatus::Quit {
            return Ok(FrameStatus::Quit);
        }

        let buffer = self.render()?;
        sink.present(&buffer)
            .map_err(|err| FrameLoopError::Present(Box::new(err)))?;
        self.frames_rendered += 1;

        Ok(FrameStatus::Continue)
    }

    /// One GPU frame: only the uniform block is produced.
    pub fn step_uniforms<U: UniformSink>(
        &mut self,
        events: &[InputEvent],
        sink: &mut U,
    ) -> Result<FrameStatus, FrameLoopError> {
        if self.update(events) == FrameStatus::Quit {
            return Ok(FrameStatus::Quit);
        }

        let uniforms = self.uniforms()?;
        sink.upload(&uniforms)
            .map_err(|err| FrameLoopError::Present(Box::new(err)))?;
        self.frames_rendered += 1;

        Ok(FrameStatus::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProjectionMode;
    use crate::controllers::interactive::Key;
    use crate::core::actions::render_frame::RenderStrategy;
    use std::convert::Infallible;

    #[derive(Default)]
    struct RecordingSink {
        frames: Vec<PixelBuffer>,
    }

    impl PixelSink for RecordingSink {
        type Error = Infallible;

        fn present(&mut self, buffer: &PixelBuffer) -> Result<(), Self::Error> {
            self.frames.push(buffer.clone());
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingUniforms {
        uploads: Vec<ShaderUniforms>,
    }

    impl UniformSink for RecordingUniforms {
        type Error = Infallible;

        fn upload(&mut self, uniforms: &ShaderUniforms) -> Result<(), Self::Error> {
            self.uploads.push(*uniforms);
            Ok(())
        }
    }

    #[derive(Debug, thiserror::Error)]
    #[error("surface lost")]
    struct SurfaceLost;

    struct FailingSink;

    impl PixelSink for FailingSink {
        type Error = SurfaceLost;

        fn present(&mut self, _: &PixelBuffer) -> Result<(), Self::Error> {
            Err(SurfaceLost)
        }
    }

    fn small_config() -> AppConfig {
        AppConfig {
            screen_width: 32,
            screen_height: 24,
            parallelism: RenderStrategy::Serial,
            ..AppConfig::default()
        }
    }

    fn zoom_in() -> InputEvent {
        InputEvent::Scroll {
            delta: 1.0,
            flipped: false,
        }
    }

    #[test]
    fn test_budget_advances_once_per_step() {
        let mut frame_loop = FrameLoop::from_config(&small_config()).unwrap();
        let mut sink = RecordingSink::default();

        for _ in 0..5 {
            frame_loop.step(&[], &mut sink).unwrap();
        }

        assert_eq!(frame_loop.budget().current(), 5);
        assert_eq!(frame_loop.frames_rendered(), 5);
        assert_eq!(sink.frames.len(), 5);
    }

    #[test]
    fn test_budget_settles_at_max() {
        let config = AppConfig {
            fractal: MandelbrotConfig {
                max_iterations: 10,
                ..MandelbrotConfig::default()
            },
            ..small_config()
        };
        let mut frame_loop = FrameLoop::from_config(&config).unwrap();

        for _ in 0..15 {
            frame_loop.update(&[]);
        }

        assert_eq!(frame_loop.budget().current(), 10);
    }

    #[test]
    fn test_quit_stops_without_rendering() {
        let mut frame_loop = FrameLoop::from_config(&small_config()).unwrap();
        let mut sink = RecordingSink::default();

        let status = frame_loop
            .step(&[InputEvent::KeyPressed(Key::Q)], &mut sink)
            .unwrap();

        assert_eq!(status, FrameStatus::Quit);
        assert!(sink.frames.is_empty());
        assert_eq!(frame_loop.budget().current(), 0);
    }

    #[test]
    fn test_zoom_preserves_budget_by_default() {
        let mut frame_loop = FrameLoop::from_config(&small_config()).unwrap();
        for _ in 0..10 {
            frame_loop.update(&[]);
        }

        frame_loop.update(&[zoom_in()]);

        assert_eq!(frame_loop.budget().current(), 11);
        assert_eq!(frame_loop.viewport().scale(), Some(4.0 / 24.0 * 0.75));
    }

    #[test]
    fn test_zoom_restarts_budget_in_reset_mode() {
        let config = AppConfig {
            zoom_budget: ZoomBudgetMode::Reset,
            ..small_config()
        };
        let mut frame_loop = FrameLoop::from_config(&config).unwrap();
        for _ in 0..10 {
            frame_loop.update(&[]);
        }

        frame_loop.update(&[zoom_in()]);

        assert_eq!(frame_loop.budget().current(), 1);
    }

    #[test]
    fn test_step_presents_rendered_frame() {
        let mut frame_loop = FrameLoop::from_config(&small_config()).unwrap();
        let mut sink = RecordingSink::default();
        for _ in 0..50 {
            frame_loop.update(&[]);
        }

        frame_loop.step(&[], &mut sink).unwrap();

        assert_eq!(sink.frames[0], frame_loop.render().unwrap());
    }

    #[test]
    fn test_present_failure_is_reported() {
        let mut frame_loop = FrameLoop::from_config(&small_config()).unwrap();

        let result = frame_loop.step(&[], &mut FailingSink);

        assert!(matches!(result, Err(FrameLoopError::Present(_))));
        assert_eq!(frame_loop.frames_rendered(), 0);
    }

    #[test]
    fn test_step_uniforms_uploads_current_state() {
        let mut frame_loop = FrameLoop::from_config(&small_config()).unwrap();
        let mut sink = RecordingUniforms::default();

        frame_loop.step_uniforms(&[], &mut sink).unwrap();
        frame_loop.step_uniforms(&[], &mut sink).unwrap();

        assert_eq!(sink.uploads.len(), 2);
        assert_eq!(sink.uploads[1].curiter, 2);
        assert_eq!(sink.uploads[1].window_size, [32.0, 24.0]);
        assert_eq!(sink.uploads[1].thresh, 4.0);
    }

    #[test]
    fn test_uniforms_unavailable_for_bounding_box() {
        let config = AppConfig {
            projection: ProjectionMode::BoundingBox,
            ..small_config()
        };
        let frame_loop = FrameLoop::from_config(&config).unwrap();

        assert!(matches!(
            frame_loop.uniforms(),
            Err(FrameLoopError::Uniforms(UniformsError::UnsupportedProjection))
        ));
    }

    #[test]
    fn test_invalid_screen_fails_setup() {
        let config = AppConfig {
            screen_height: 0,
            ..small_config()
        };

        assert!(matches!(
            FrameLoop::from_config(&config),
            Err(FrameLoopError::Setup(_))
        ));
    }
}
