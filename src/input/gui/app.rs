use std::mem;
use std::time::Instant;

use tracing::{debug, error};
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoopWindowTarget};
use winit::window::Window;

use crate::controllers::frame_loop::{FrameLoop, FrameStatus};
use crate::controllers::frame_pacer::FramePacer;
use crate::controllers::interactive::{InputEvent, Key};
use crate::input::gui::commands::run_gui::GuiError;
use crate::input::gui::translate::{PointerTracker, translate_window_event};
use crate::presenters::pixels::presenter::PixelsPresenter;

/// Collects window input between redraws and drives one frame per redraw.
pub struct GuiApp {
    window: &'static Window,
    frame_loop: FrameLoop,
    presenter: PixelsPresenter,
    pacer: FramePacer,
    pointer: PointerTracker,
    pending: Vec<InputEvent>,
    error: Option<GuiError>,
}

impl GuiApp {
    pub fn new(
        window: &'static Window,
        frame_loop: FrameLoop,
        presenter: PixelsPresenter,
        pacer: FramePacer,
    ) -> Self {
        Self {
            window,
            frame_loop,
            presenter,
            pacer,
            pointer: PointerTracker::default(),
            pending: Vec::new(),
            error: None,
        }
    }

    /// The first failure that ended the loop, if any.
    pub fn take_error(&mut self) -> Option<GuiError> {
        self.error.take()
    }

    pub fn handle_event(&mut self, event: Event<()>, elwt: &EventLoopWindowTarget<()>) {
        match event {
            Event::WindowEvent { window_id, event } if window_id == self.window.id() => {
                self.handle_window_event(&event, elwt);
            }
            Event::AboutToWait => {
                let quit_pending = self.pending.iter().any(|input| {
                    matches!(input, InputEvent::Quit | InputEvent::KeyPressed(Key::Q | Key::Escape))
                });
                if quit_pending || self.pacer.is_due(Instant::now()) {
                    self.window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn handle_window_event(&mut self, event: &WindowEvent, elwt: &EventLoopWindowTarget<()>) {
        match event {
            WindowEvent::RedrawRequested => self.redraw(elwt),
            WindowEvent::Resized(size) => {
                if let Err(err) = self.presenter.resize_surface(size.width, size.height) {
                    self.fail(err.into(), elwt);
                }
            }
            _ => {
                let scale = self.buffer_scale();
                if let Some(input) = translate_window_event(event, &mut self.pointer, scale) {
                    self.pending.push(input);
                }
            }
        }
    }

    fn redraw(&mut self, elwt: &EventLoopWindowTarget<()>) {
        let events = mem::take(&mut self.pending);

        match self.frame_loop.step(&events, &mut self.presenter) {
            Ok(FrameStatus::Quit) => {
                debug!(frames = self.frame_loop.frames_rendered(), "closing window");
                elwt.exit();
            }
            Ok(FrameStatus::Continue) => match self.pacer.schedule(Instant::now()) {
                Some(due) => elwt.set_control_flow(ControlFlow::WaitUntil(due)),
                None => elwt.set_control_flow(ControlFlow::Poll),
            },
            Err(err) => self.fail(err.into(), elwt),
        }
    }

    fn fail(&mut self, err: GuiError, elwt: &EventLoopWindowTarget<()>) {
        error!("{err}");
        if self.error.is_none() {
            self.error = Some(err);
        }
        elwt.exit();
    }

    // window pixels to buffer pixels, so drags track the cursor
    fn buffer_scale(&self) -> f64 {
        let window_width = self.window.inner_size().width;
        if window_width == 0 {
            return 1.0;
        }

        f64::from(self.presenter.screen().width()) / f64::from(window_width)
    }
}
