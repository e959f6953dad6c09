#[cfg(feature = "gui")]
pub mod pixels;
pub mod terminal;
