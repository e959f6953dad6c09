use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::point::Point;
use crate::core::data::screen_size::ScreenSize;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ViewportError {
    #[error("viewport scale must be finite and positive, got {scale}")]
    InvalidScale { scale: f64 },
    #[error("viewport centre must be finite, got ({}, {})", .centre.real, .centre.imag)]
    NonFiniteCentre { centre: Complex },
    #[error(
        "point (x: {}, y: {}) is outside the {}x{} screen",
        .pixel.x, .pixel.y, .screen.width(), .screen.height()
    )]
    PixelOutsideScreen { pixel: Point, screen: ScreenSize },
}

/// Smallest zoomable scale. Below it an f64 centre no longer resolves
/// neighbouring pixels.
pub const MIN_SCALE: f64 = 1e-18;
/// Largest zoomable scale. The whole set is a few pixels wide by then.
pub const MAX_SCALE: f64 = 1e3;

/// How screen pixels map onto the complex plane.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Projection {
    /// `scale` plane units per pixel around `centre`. Supports pan and zoom.
    Centred { centre: Complex, scale: f64 },
    /// Fixed region stretched over the screen. Static, ignores pan and zoom.
    BoundingBox { region: ComplexRect },
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    screen: ScreenSize,
    projection: Projection,
}

impl Viewport {
    pub fn centred(screen: ScreenSize, centre: Complex, scale: f64) -> Result<Self, ViewportError> {
        validate_scale(scale)?;
        if !centre.is_finite() {
            return Err(ViewportError::NonFiniteCentre { centre });
        }

        Ok(Self {
            screen,
            projection: Projection::Centred { centre, scale },
        })
    }

    #[must_use]
    pub fn bounding_box(screen: ScreenSize, region: ComplexRect) -> Self {
        Self {
            screen,
            projection: Projection::BoundingBox { region },
        }
    }

    #[must_use]
    pub fn screen(&self) -> ScreenSize {
        self.screen
    }

    #[must_use]
    pub fn projection(&self) -> Projection {
        self.projection
    }

    #[must_use]
    pub fn is_interactive(&self) -> bool {
        matches!(self.projection, Projection::Centred { .. })
    }

    /// Plane units per pixel, `None` for a bounding-box projection whose
    /// horizontal and vertical steps may differ.
    #[must_use]
    pub fn scale(&self) -> Option<f64> {
        match self.projection {
            Projection::Centred { scale, .. } => Some(scale),
            Projection::BoundingBox { .. } => None,
        }
    }

    #[must_use]
    pub fn centre(&self) -> Complex {
        match self.projection {
            Projection::Centred { centre, .. } => centre,
            Projection::BoundingBox { region } => Complex::new(
                region.min().real + region.width() / 2.0,
                region.min().imag + region.height() / 2.0,
            ),
        }
    }

    pub fn pixel_to_plane(&self, pixel: Point) -> Result<Complex, ViewportError> {
        if !self.screen.contains_point(pixel) {
            return Err(ViewportError::PixelOutsideScreen {
                pixel,
                screen: self.screen,
            });
        }

        match self.projection {
            Projection::Centred { centre, scale } => {
                // integer half extents keep the middle pixel exactly on the centre
                let camera_x = i64::from(pixel.x) - i64::from(self.screen.width() / 2);
                let camera_y = i64::from(pixel.y) - i64::from(self.screen.height() / 2);

                Ok(Complex {
                    real: camera_x as f64 * scale + centre.real,
                    imag: camera_y as f64 * scale + centre.imag,
                })
            }
            Projection::BoundingBox { region } => {
                let dx = region.width() / f64::from(self.screen.width());
                let dy = region.height() / f64::from(self.screen.height());

                Ok(Complex {
                    real: region.min().real + dx * f64::from(pixel.x),
                    imag: region.min().imag + dy * f64::from(pixel.y),
                })
            }
        }
    }

    /// Multiplies the scale by `factor`, clamped to
    /// `[MIN_SCALE, MAX_SCALE]`. Returns whether the scale changed.
    pub fn zoom_by(&mut self, factor: f64) -> bool {
        let Projection::Centred { scale, .. } = &mut self.projection else {
            return false;
        };

        if !factor.is_finite() || factor <= 0.0 {
            return false;
        }

        let next = (*scale * factor).clamp(MIN_SCALE, MAX_SCALE);
        let changed = next != *scale;
        *scale = next;

        changed
    }

    /// Moves the centre by a plane-space offset. Returns whether it moved.
    pub fn pan_by(&mut self, offset: Complex) -> bool {
        let Projection::Centred { centre, .. } = &mut self.projection else {
            return false;
        };

        let next = *centre + offset;
        if !next.is_finite() || next == *centre {
            return false;
        }

        *centre = next;
        true
    }
}

fn validate_scale(scale: f64) -> Result<(), ViewportError> {
    if scale.is_finite() && scale > 0.0 {
        Ok(())
    } else {
        Err(ViewportError::InvalidScale { scale })
    }
}
