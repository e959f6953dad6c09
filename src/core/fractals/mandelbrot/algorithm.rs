use std::str::FromStr;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::mandelbrot::escape_time::escape_time;

/// Float width the escape loop runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precision {
    Single,
    #[default]
    Double,
}

impl Precision {
    pub const ALL: &'static [Self] = &[Self::Double, Self::Single];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Double => "double",
        }
    }
}

impl FromStr for Precision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.display_name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("expected single or double, got '{s}'"))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MandelbrotAlgorithm {
    viewport: Viewport,
    max_iterations: u32,
    threshold: f64,
    precision: Precision,
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(
        viewport: Viewport,
        max_iterations: u32,
        threshold: f64,
        precision: Precision,
    ) -> Self {
        Self {
            viewport,
            max_iterations,
            threshold,
            precision,
        }
    }
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;
    type Failure = ViewportError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = self.viewport.pixel_to_plane(pixel)?;

        let k = match self.precision {
            Precision::Single => escape_time(
                c.real as f32,
                c.imag as f32,
                self.max_iterations,
                self.threshold as f32,
            ),
            Precision::Double => escape_time(c.real, c.imag, self.max_iterations, self.threshold),
        };

        Ok(k)
    }
}
