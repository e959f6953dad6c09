use std::path::PathBuf;

use thiserror::Error;

use crate::core::data::complex_rect::ComplexRectError;
use crate::core::data::screen_size::ScreenSizeError;
use crate::core::data::viewport::ViewportError;

/// Problems with a single configuration line. None of them is fatal: the
/// line is skipped and the previous value kept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("value with no label: {value}")]
    ValueWithoutLabel { value: String },
    #[error("label with no value: {label}")]
    LabelWithoutValue { label: String },
    #[error("invalid value for {label}: {reason}")]
    InvalidValue { label: String, reason: String },
    #[error("unknown label: {label}")]
    UnknownLabel { label: String },
}

#[derive(Debug, Error)]
#[error("can't read {}: {source}", .path.display())]
pub struct ConfigReadError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// The loaded values could not be turned into a starting view.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ViewSetupError {
    #[error(transparent)]
    Screen(#[from] ScreenSizeError),
    #[error(transparent)]
    Region(#[from] ComplexRectError),
    #[error(transparent)]
    Viewport(#[from] ViewportError),
}
