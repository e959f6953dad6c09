/// Keys the viewer reacts to. Everything else arrives as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Q,
    Escape,
    Other,
}

/// Platform-independent input, translated from whatever the window
/// collaborator delivers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Window close or equivalent.
    Quit,
    KeyPressed(Key),
    /// Wheel motion. Positive `delta` is away from the user; `flipped` is set
    /// when the platform already inverted it for natural scrolling.
    Scroll { delta: f64, flipped: bool },
    /// Relative pointer motion in buffer pixels.
    PointerMoved { dx: f64, dy: f64, drag_held: bool },
    Other,
}
