use thiserror::Error;
use tracing::info;
use winit::dpi::PhysicalSize;
use winit::error::{EventLoopError, OsError};
use winit::event_loop::EventLoop;
use winit::window::{Fullscreen, Window, WindowBuilder};

use crate::config::AppConfig;
use crate::controllers::frame_loop::{FrameLoop, FrameLoopError};
use crate::controllers::frame_pacer::FramePacer;
use crate::input::gui::app::GuiApp;
use crate::presenters::pixels::presenter::{PixelsPresenter, PixelsPresenterError};

const WINDOW_TITLE: &str = "Mandelbrot";

#[derive(Debug, Error)]
pub enum GuiError {
    #[error(transparent)]
    FrameLoop(#[from] FrameLoopError),
    #[error("event loop error: {0}")]
    EventLoop(#[from] EventLoopError),
    #[error("can't create window: {0}")]
    Window(#[from] OsError),
    #[error(transparent)]
    Presenter(#[from] PixelsPresenterError),
}

/// Opens the viewer window and runs frames until the user quits.
pub struct RunGuiCommand {
    config: AppConfig,
}

impl RunGuiCommand {
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn execute(self) -> Result<(), GuiError> {
        let frame_loop = FrameLoop::from_config(&self.config)?;
        let screen = frame_loop.viewport().screen();

        let event_loop = EventLoop::new()?;

        let mut builder = WindowBuilder::new()
            .with_title(WINDOW_TITLE)
            .with_inner_size(PhysicalSize::new(screen.width(), screen.height()));
        if self.config.fullscreen {
            builder = builder.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        // pixels needs the window for the life of the surface
        let window: &'static Window = Box::leak(Box::new(builder.build(&event_loop)?));

        let presenter = PixelsPresenter::new(window, screen)?;
        let pacer = FramePacer::new(self.config.frame_period());

        info!(
            width = screen.width(),
            height = screen.height(),
            fullscreen = self.config.fullscreen,
            "window open"
        );

        let mut app = GuiApp::new(window, frame_loop, presenter, pacer);
        event_loop.run(|event, elwt| app.handle_event(event, elwt))?;

        match app.take_error() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
