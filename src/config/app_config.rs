use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::config::errors::ViewSetupError;
use crate::controllers::interactive::InteractionSettings;
use crate::core::actions::render_frame::RenderStrategy;
use crate::core::animation::controller::ZoomBudgetMode;
use crate::core::data::complex::Complex;
use crate::core::data::screen_size::ScreenSize;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::mandelbrot_config::{MandelbrotConfig, default_region};

pub const DEFAULT_CONFIG_PATH: &str = "conf.txt";
/// Upper bound for the `threads` setting.
pub const MAX_THREADS: usize = 256;

/// Which pixel-to-plane mapping the session starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectionMode {
    /// Centre plus scale, initial scale fits 4 units of height. Interactive.
    #[default]
    Centred,
    /// The fixed default region stretched over the screen.
    BoundingBox,
}

impl ProjectionMode {
    pub const ALL: &'static [Self] = &[Self::Centred, Self::BoundingBox];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Centred => "centered",
            Self::BoundingBox => "bounds",
        }
    }
}

impl FromStr for ProjectionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|mode| mode.display_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("expected centered or bounds, got '{s}'"))
    }
}

/// Every tunable of a viewing session.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub screen_width: u32,
    pub screen_height: u32,
    pub fullscreen: bool,
    pub vertex_shader: PathBuf,
    pub fragment_shader: PathBuf,
    pub projection: ProjectionMode,
    pub fractal: MandelbrotConfig,
    pub interaction: InteractionSettings,
    pub zoom_budget: ZoomBudgetMode,
    pub parallelism: RenderStrategy,
    /// `None` uses every available core.
    pub threads: Option<NonZeroUsize>,
    /// Zero disables pacing.
    pub frames_per_second: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            screen_width: 800,
            screen_height: 600,
            fullscreen: false,
            vertex_shader: PathBuf::from("shaders/vert.glsl"),
            fragment_shader: PathBuf::from("shaders/frag.glsl"),
            projection: ProjectionMode::default(),
            fractal: MandelbrotConfig::default(),
            interaction: InteractionSettings::default(),
            zoom_budget: ZoomBudgetMode::default(),
            parallelism: RenderStrategy::default(),
            threads: None,
            frames_per_second: 30,
        }
    }
}

impl AppConfig {
    pub fn screen(&self) -> Result<ScreenSize, ViewSetupError> {
        Ok(ScreenSize::new(self.screen_width, self.screen_height)?)
    }

    /// Starting view: centred on the origin at `4 / screen_height` units per
    /// pixel, or the default region for the bounding-box projection.
    pub fn initial_viewport(&self) -> Result<Viewport, ViewSetupError> {
        let screen = self.screen()?;

        let viewport = match self.projection {
            ProjectionMode::Centred => Viewport::centred(
                screen,
                Complex::new(0.0, 0.0),
                4.0 / f64::from(screen.height()),
            )?,
            ProjectionMode::BoundingBox => Viewport::bounding_box(screen, default_region()?),
        };

        Ok(viewport)
    }

    #[must_use]
    pub fn frame_period(&self) -> Option<Duration> {
        (self.frames_per_second > 0)
            .then(|| Duration::from_secs_f64(1.0 / f64::from(self.frames_per_second)))
    }
}
