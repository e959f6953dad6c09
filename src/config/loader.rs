use std::num::NonZeroUsize;
use std::path::Path;
use std::str::FromStr;

use tracing::{info, warn};

use crate::config::app_config::{AppConfig, MAX_THREADS};
use crate::config::errors::{ConfigError, ConfigReadError};
use crate::controllers::interactive::InteractionSettings;

#[derive(Debug, Clone, PartialEq)]
pub struct ConfigWarning {
    /// 1-based.
    pub line: usize,
    pub error: ConfigError,
}

/// Parsed configuration plus every line that was skipped and why.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigReport {
    pub config: AppConfig,
    pub warnings: Vec<ConfigWarning>,
}

/// Reads `path` over the defaults. Never fails: a missing or unreadable
/// file leaves the defaults in place and skipped lines are logged.
pub fn load_config(path: impl AsRef<Path>) -> AppConfig {
    let path = path.as_ref();

    match read_config(path) {
        Ok(report) => {
            for warning in &report.warnings {
                warn!(path = %path.display(), line = warning.line, "{}", warning.error);
            }
            info!(path = %path.display(), "loaded configuration");
            report.config
        }
        Err(err) if err.source.kind() == std::io::ErrorKind::NotFound => {
            info!(path = %path.display(), "no configuration file, using defaults");
            AppConfig::default()
        }
        Err(err) => {
            warn!("{err}, using defaults");
            AppConfig::default()
        }
    }
}

pub fn read_config(path: &Path) -> Result<ConfigReport, ConfigReadError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigReadError {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_config(&text, AppConfig::default()))
}

/// Overlays `label value` / `label = value` lines onto `base`. Blank lines
/// and lines starting with `#` are skipped silently.
#[must_use]
pub fn parse_config(text: &str, base: AppConfig) -> ConfigReport {
    let mut config = base;
    let mut warnings = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let result = match split_line(line) {
            Line::Blank => Ok(()),
            Line::ValueOnly(value) => Err(ConfigError::ValueWithoutLabel {
                value: value.to_owned(),
            }),
            Line::LabelOnly(label) => Err(ConfigError::LabelWithoutValue {
                label: label.to_owned(),
            }),
            Line::Entry { label, value } => apply_entry(&mut config, label, value),
        };

        if let Err(error) = result {
            warnings.push(ConfigWarning {
                line: index + 1,
                error,
            });
        }
    }

    ConfigReport { config, warnings }
}

#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Blank,
    ValueOnly(&'a str),
    LabelOnly(&'a str),
    Entry { label: &'a str, value: &'a str },
}

// label runs to whitespace or '='; the value is the next token after any
// mix of whitespace and '='
fn split_line(line: &str) -> Line<'_> {
    let line = line.trim_start();
    if line.starts_with('#') {
        return Line::Blank;
    }

    let label_end = line
        .find(|c: char| c.is_whitespace() || c == '=')
        .unwrap_or(line.len());
    let (label, rest) = line.split_at(label_end);
    let value = rest
        .trim_start_matches(|c: char| c.is_whitespace() || c == '=')
        .split_whitespace()
        .next()
        .unwrap_or("");

    match (label.is_empty(), value.is_empty()) {
        (true, true) => Line::Blank,
        (true, false) => Line::ValueOnly(value),
        (false, true) => Line::LabelOnly(label),
        (false, false) => Line::Entry { label, value },
    }
}

fn apply_entry(config: &mut AppConfig, label: &str, value: &str) -> Result<(), ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidValue {
        label: label.to_owned(),
        reason,
    };

    match label {
        "screen_width" => config.screen_width = parse_positive(value).map_err(invalid)?,
        "screen_height" => config.screen_height = parse_positive(value).map_err(invalid)?,
        "fullscreen" => config.fullscreen = parse_flag(value).map_err(invalid)?,
        "vertex_shader" => config.vertex_shader = value.into(),
        "fragment_shader" => config.fragment_shader = value.into(),
        "max_iterations" => config.fractal.max_iterations = parse_positive(value).map_err(invalid)?,
        "threshold" => {
            let threshold: f64 = parse_value(value).map_err(invalid)?;
            if !(threshold.is_finite() && threshold > 0.0) {
                return Err(invalid(format!("must be finite and positive, got {threshold}")));
            }
            config.fractal.threshold = threshold;
        }
        "zoom_factor" => {
            let current = config.interaction;
            config.interaction = InteractionSettings::new(
                parse_value(value).map_err(invalid)?,
                current.vertical_pan(),
                current.invert_scroll(),
            )
            .map_err(|err| invalid(err.to_string()))?;
        }
        "vertical_pan" => {
            let current = config.interaction;
            config.interaction = InteractionSettings::new(
                current.zoom_factor(),
                parse_value(value).map_err(invalid)?,
                current.invert_scroll(),
            )
            .map_err(|err| invalid(err.to_string()))?;
        }
        "invert_scroll" => {
            let current = config.interaction;
            config.interaction = InteractionSettings::new(
                current.zoom_factor(),
                current.vertical_pan(),
                parse_flag(value).map_err(invalid)?,
            )
            .map_err(|err| invalid(err.to_string()))?;
        }
        "projection" => config.projection = parse_value(value).map_err(invalid)?,
        "zoom_budget" => config.zoom_budget = parse_value(value).map_err(invalid)?,
        "parallelism" => config.parallelism = parse_value(value).map_err(invalid)?,
        "precision" => config.fractal.precision = parse_value(value).map_err(invalid)?,
        "palette" => config.fractal.colour_map_kind = parse_value(value).map_err(invalid)?,
        "threads" => {
            let threads: usize = parse_value(value).map_err(invalid)?;
            if threads > MAX_THREADS {
                return Err(invalid(format!("must be at most {MAX_THREADS}, got {threads}")));
            }
            config.threads = NonZeroUsize::new(threads);
        }
        "frames_per_second" => config.frames_per_second = parse_value(value).map_err(invalid)?,
        _ => {
            return Err(ConfigError::UnknownLabel {
                label: label.to_owned(),
            });
        }
    }

    Ok(())
}

fn parse_value<T>(value: &str) -> Result<T, String>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.parse().map_err(|err| format!("'{value}': {err}"))
}

fn parse_positive(value: &str) -> Result<u32, String> {
    let number: i64 = parse_value(value)?;
    if number <= 0 {
        return Err(format!("must be positive, got {number}"));
    }

    u32::try_from(number).map_err(|_| format!("{number} is too large"))
}

fn parse_flag(value: &str) -> Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" => Ok(true),
        "false" | "no" | "off" => Ok(false),
        _ => parse_value::<i64>(value).map(|n| n != 0),
    }
}
