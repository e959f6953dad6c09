use crate::core::data::point::Point;
use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ScreenSizeError {
    #[error("screen size must be positive: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

/// Pixel dimensions of the render target. Fixed for a session.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ScreenSize {
    width: u32,
    height: u32,
}

impl ScreenSize {
    pub fn new(width: u32, height: u32) -> Result<Self, ScreenSizeError> {
        if width == 0 || height == 0 {
            return Err(ScreenSizeError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as u32) < self.width
            && (point.y as u32) < self.height
    }

    /// Row-major pixel position for a buffer index.
    #[must_use]
    pub fn point_at(&self, index: usize) -> Point {
        let width = self.width as usize;

        Point {
            x: (index % width) as i32,
            y: (index / width) as i32,
        }
    }
}
