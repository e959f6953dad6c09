pub mod adapters;
pub mod config;
pub mod controllers;
pub mod core;
#[cfg(feature = "gui")]
pub mod input;
pub mod logging;
pub mod presenters;

pub use config::{AppConfig, DEFAULT_CONFIG_PATH, load_config};
pub use controllers::frame_loop::{FrameLoop, FrameLoopError, FrameStatus};
pub use controllers::terminal::terminal_controller;
pub use logging::init_logging;

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::{GuiError, RunGuiCommand};
