use std::str::FromStr;

use thiserror::Error;

pub const DEFAULT_ZOOM_FACTOR: f64 = 0.75;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InteractionSettingsError {
    #[error("zoom factor must lie strictly between 0 and 1, got {0}")]
    ZoomFactorOutOfRange(f64),
}

/// Which way the view moves under a vertical drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalPan {
    /// Content follows the pointer.
    #[default]
    Follow,
    Inverted,
}

impl VerticalPan {
    pub const ALL: &'static [Self] = &[Self::Follow, Self::Inverted];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Follow => "follow",
            Self::Inverted => "inverted",
        }
    }

    /// Multiplier applied to the pointer's `dy` before scaling.
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            Self::Follow => -1.0,
            Self::Inverted => 1.0,
        }
    }
}

impl FromStr for VerticalPan {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|pan| pan.display_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("expected follow or inverted, got '{s}'"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionSettings {
    zoom_factor: f64,
    vertical_pan: VerticalPan,
    invert_scroll: bool,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            zoom_factor: DEFAULT_ZOOM_FACTOR,
            vertical_pan: VerticalPan::default(),
            invert_scroll: false,
        }
    }
}

impl InteractionSettings {
    pub fn new(
        zoom_factor: f64,
        vertical_pan: VerticalPan,
        invert_scroll: bool,
    ) -> Result<Self, InteractionSettingsError> {
        if !(zoom_factor > 0.0 && zoom_factor < 1.0) {
            return Err(InteractionSettingsError::ZoomFactorOutOfRange(zoom_factor));
        }

        Ok(Self {
            zoom_factor,
            vertical_pan,
            invert_scroll,
        })
    }

    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    #[must_use]
    pub fn vertical_pan(&self) -> VerticalPan {
        self.vertical_pan
    }

    #[must_use]
    pub fn invert_scroll(&self) -> bool {
        self.invert_scroll
    }
}
