use crate::core::data::complex::Complex;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ComplexRectError {
    #[error("complex rect size must be positive: {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
}

/// Axis-aligned region of the complex plane, `min` holding the smallest
/// real and imaginary parts.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    min: Complex,
    max: Complex,
}

impl ComplexRect {
    pub fn new(min: Complex, max: Complex) -> Result<Self, ComplexRectError> {
        let width = max.real - min.real;
        let height = max.imag - min.imag;

        // also rejects NaN bounds
        if !(width > 0.0 && height > 0.0) || !width.is_finite() || !height.is_finite() {
            return Err(ComplexRectError::InvalidSize { width, height });
        }

        Ok(Self { min, max })
    }

    #[must_use]
    pub fn min(&self) -> Complex {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> Complex {
        self.max
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.real - self.min.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.imag - self.min.imag
    }
}
