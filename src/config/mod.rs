pub mod app_config;
pub mod errors;
pub mod loader;

pub use app_config::{AppConfig, DEFAULT_CONFIG_PATH, MAX_THREADS, ProjectionMode};
pub use errors::{ConfigError, ConfigReadError, ViewSetupError};
pub use loader::{ConfigReport, ConfigWarning, load_config, parse_config, read_config};
