use tracing::{debug, info};

use crate::controllers::interactive::events::{InputEvent, Key};
use crate::controllers::interactive::settings::InteractionSettings;
use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;

/// What a batch of events did to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionOutcome {
    pub zoomed: bool,
    pub panned: bool,
}

impl InteractionOutcome {
    fn merge(self, other: Self) -> Self {
        Self {
            zoomed: self.zoomed || other.zoomed,
            panned: self.panned || other.panned,
        }
    }
}

/// Applies pan, zoom and quit events to a viewport between frames.
#[derive(Debug)]
pub struct InteractionController {
    settings: InteractionSettings,
    quit_requested: bool,
}

impl InteractionController {
    #[must_use]
    pub fn new(settings: InteractionSettings) -> Self {
        Self {
            settings,
            quit_requested: false,
        }
    }

    #[must_use]
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn apply_all<'a>(
        &mut self,
        viewport: &mut Viewport,
        events: impl IntoIterator<Item = &'a InputEvent>,
    ) -> InteractionOutcome {
        events
            .into_iter()
            .fold(InteractionOutcome::default(), |outcome, event| {
                outcome.merge(self.apply(viewport, event))
            })
    }

    pub fn apply(&mut self, viewport: &mut Viewport, event: &InputEvent) -> InteractionOutcome {
        match *event {
            InputEvent::Quit | InputEvent::KeyPressed(Key::Q | Key::Escape) => {
                if !self.quit_requested {
                    info!("quit requested");
                }
                self.quit_requested = true;
                InteractionOutcome::default()
            }
            InputEvent::Scroll { delta, flipped } => InteractionOutcome {
                zoomed: self.zoom(viewport, delta, flipped),
                panned: false,
            },
            InputEvent::PointerMoved {
                dx,
                dy,
                drag_held: true,
            } => InteractionOutcome {
                zoomed: false,
                panned: self.pan(viewport, dx, dy),
            },
            InputEvent::PointerMoved { .. }
            | InputEvent::KeyPressed(Key::Other)
            | InputEvent::Other => InteractionOutcome::default(),
        }
    }

    fn zoom(&self, viewport: &mut Viewport, delta: f64, flipped: bool) -> bool {
        if !viewport.is_interactive() {
            return false;
        }

        let mut delta = if flipped { -delta } else { delta };
        if self.settings.invert_scroll() {
            delta = -delta;
        }

        let factor = if delta > 0.0 {
            self.settings.zoom_factor()
        } else if delta < 0.0 {
            1.0 / self.settings.zoom_factor()
        } else {
            return false;
        };

        let zoomed = viewport.zoom_by(factor);
        if zoomed {
            debug!(scale = ?viewport.scale(), "zoomed");
        }

        zoomed
    }

    fn pan(&self, viewport: &mut Viewport, dx: f64, dy: f64) -> bool {
        let Some(scale) = viewport.scale() else {
            return false;
        };

        let offset = Complex::new(-dx * scale, self.settings.vertical_pan().sign() * dy * scale);

        viewport.pan_by(offset)
    }
}
