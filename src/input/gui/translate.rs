use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::controllers::interactive::{InputEvent, Key};

// pixel deltas from touchpads, per line step of a wheel
const PIXELS_PER_LINE: f64 = 40.0;

/// Turns absolute cursor positions into relative drag deltas.
#[derive(Debug, Default)]
pub struct PointerTracker {
    last: Option<(f64, f64)>,
    drag_held: bool,
}

impl PointerTracker {
    /// `buffer_scale` converts window pixels to buffer pixels.
    pub fn moved_to(&mut self, x: f64, y: f64, buffer_scale: f64) -> Option<InputEvent> {
        let previous = self.last.replace((x, y))?;

        Some(InputEvent::PointerMoved {
            dx: (x - previous.0) * buffer_scale,
            dy: (y - previous.1) * buffer_scale,
            drag_held: self.drag_held,
        })
    }

    pub fn set_drag_held(&mut self, held: bool) {
        self.drag_held = held;
    }

    pub fn left(&mut self) {
        self.last = None;
    }
}

#[must_use]
pub fn translate_key(key: PhysicalKey, state: ElementState) -> Option<InputEvent> {
    if state != ElementState::Pressed {
        return None;
    }

    let key = match key {
        PhysicalKey::Code(KeyCode::KeyQ) => Key::Q,
        PhysicalKey::Code(KeyCode::Escape) => Key::Escape,
        _ => Key::Other,
    };

    Some(InputEvent::KeyPressed(key))
}

/// winit already reports wheel motion in the user's preferred direction, so
/// the event never carries the flipped flag.
#[must_use]
pub fn translate_scroll(delta: MouseScrollDelta) -> InputEvent {
    let delta = match delta {
        MouseScrollDelta::LineDelta(_, y) => f64::from(y),
        MouseScrollDelta::PixelDelta(position) => position.y / PIXELS_PER_LINE,
    };

    InputEvent::Scroll {
        delta,
        flipped: false,
    }
}

pub fn translate_window_event(
    event: &WindowEvent,
    pointer: &mut PointerTracker,
    buffer_scale: f64,
) -> Option<InputEvent> {
    match event {
        WindowEvent::CloseRequested => Some(InputEvent::Quit),
        WindowEvent::KeyboardInput { event, .. } => translate_key(event.physical_key, event.state),
        WindowEvent::MouseWheel { delta, .. } => Some(translate_scroll(*delta)),
        WindowEvent::MouseInput {
            state,
            button: MouseButton::Left,
            ..
        } => {
            pointer.set_drag_held(*state == ElementState::Pressed);
            None
        }
        WindowEvent::CursorMoved { position, .. } => {
            pointer.moved_to(position.x, position.y, buffer_scale)
        }
        WindowEvent::CursorLeft { .. } => {
            pointer.left();
            None
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;

    #[test]
    fn test_first_position_gives_no_delta() {
        let mut pointer = PointerTracker::default();

        assert_eq!(pointer.moved_to(10.0, 10.0, 1.0), None);
    }

    #[test]
    fn test_drag_delta_is_scaled_to_buffer() {
        let mut pointer = PointerTracker::default();
        pointer.moved_to(10.0, 10.0, 0.5);
        pointer.set_drag_held(true);

        assert_eq!(
            pointer.moved_to(14.0, 6.0, 0.5),
            Some(InputEvent::PointerMoved {
                dx: 2.0,
                dy: -2.0,
                drag_held: true
            })
        );
    }

    #[test]
    fn test_leaving_window_forgets_position() {
        let mut pointer = PointerTracker::default();
        pointer.moved_to(10.0, 10.0, 1.0);

        pointer.left();

        assert_eq!(pointer.moved_to(50.0, 50.0, 1.0), None);
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(
            translate_key(PhysicalKey::Code(KeyCode::KeyQ), ElementState::Pressed),
            Some(InputEvent::KeyPressed(Key::Q))
        );
        assert_eq!(
            translate_key(PhysicalKey::Code(KeyCode::Escape), ElementState::Pressed),
            Some(InputEvent::KeyPressed(Key::Escape))
        );
        assert_eq!(
            translate_key(PhysicalKey::Code(KeyCode::KeyA), ElementState::Pressed),
            Some(InputEvent::KeyPressed(Key::Other))
        );
        assert_eq!(
            translate_key(PhysicalKey::Code(KeyCode::KeyQ), ElementState::Released),
            None
        );
    }

    #[test]
    fn test_scroll_deltas() {
        assert_eq!(
            translate_scroll(MouseScrollDelta::LineDelta(0.0, 1.0)),
            InputEvent::Scroll {
                delta: 1.0,
                flipped: false
            }
        );
        assert_eq!(
            translate_scroll(MouseScrollDelta::PixelDelta(PhysicalPosition::new(0.0, -80.0))),
            InputEvent::Scroll {
                delta: -2.0,
                flipped: false
            }
        );
    }
}
