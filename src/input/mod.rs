//! Input adapters that turn platform events into viewer input.

#[cfg(feature = "gui")]
pub mod gui;
