//! Pan, zoom and quit handling between frames.
//!
//! Window collaborators translate their native events into [`InputEvent`]s;
//! the [`InteractionController`] applies them to the viewport.

mod controller;
pub mod events;
pub mod settings;

pub use controller::{InteractionController, InteractionOutcome};
pub use events::{InputEvent, Key};
pub use settings::{InteractionSettings, InteractionSettingsError, VerticalPan};
