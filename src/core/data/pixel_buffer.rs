use crate::core::data::colour::{Colour, PackedColour};
use crate::core::data::point::Point;
use crate::core::data::screen_size::ScreenSize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PixelBufferError {
    #[error(
        "pixel at x:{}, y:{} outside of screen {}x{}",
        .pixel.x, .pixel.y, .screen.width(), .screen.height()
    )]
    PixelOutsideBounds { pixel: Point, screen: ScreenSize },
    #[error("screen size {screen_size} does not match buffer size {buffer_size}")]
    BoundsMismatch {
        screen_size: usize,
        buffer_size: usize,
    },
}

pub type PixelBufferData = Vec<PackedColour>;

/// One frame of packed `0x00RRGGBB` pixels in row-major order.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    screen: ScreenSize,
    pixels: PixelBufferData,
}

impl PixelBuffer {
    pub fn from_data(
        screen: ScreenSize,
        pixels: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        if screen.pixel_count() != pixels.len() {
            return Err(PixelBufferError::BoundsMismatch {
                screen_size: screen.pixel_count(),
                buffer_size: pixels.len(),
            });
        }

        Ok(Self { screen, pixels })
    }

    #[must_use]
    pub fn screen(&self) -> ScreenSize {
        self.screen
    }

    #[must_use]
    pub fn pixels(&self) -> &[PackedColour] {
        &self.pixels
    }

    #[must_use]
    pub fn rows(&self) -> std::slice::ChunksExact<'_, PackedColour> {
        self.pixels.chunks_exact(self.screen.width() as usize)
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, PixelBufferError> {
        if !self.screen.contains_point(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                screen: self.screen,
            });
        }

        let index = pixel.y as usize * self.screen.width() as usize + pixel.x as usize;

        Ok(Colour::from_packed(self.pixels[index]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_screen(width: u32, height: u32) -> ScreenSize {
        ScreenSize::new(width, height).unwrap()
    }

    #[test]
    fn test_from_data_valid() {
        let screen = create_screen(2, 2);
        let data = vec![0xFF0000, 0x00FF00, 0x0000FF, 0xFFFF00];

        let buffer = PixelBuffer::from_data(screen, data.clone()).unwrap();

        assert_eq!(buffer.screen(), screen);
        assert_eq!(buffer.pixels(), data.as_slice());
    }

    #[test]
    fn test_from_data_buffer_too_small() {
        let result = PixelBuffer::from_data(create_screen(2, 2), vec![0xFF0000]);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                screen_size: 4,
                buffer_size: 1
            }
        );
    }

    #[test]
    fn test_from_data_buffer_too_large() {
        let result = PixelBuffer::from_data(create_screen(2, 2), vec![0; 8]);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                screen_size: 4,
                buffer_size: 8
            }
        );
    }

    #[test]
    fn test_pixel_reads_row_major() {
        let buffer =
            PixelBuffer::from_data(create_screen(3, 2), vec![0, 0, 0, 0, 0, 0x1852B1]).unwrap();

        assert_eq!(
            buffer.pixel(Point { x: 2, y: 1 }).unwrap(),
            Colour { r: 0x18, g: 0x52, b: 0xB1 }
        );
        assert_eq!(buffer.pixel(Point { x: 0, y: 1 }).unwrap(), Colour::BACKGROUND);
    }

    #[test]
    fn test_pixel_outside_bounds() {
        let screen = create_screen(3, 2);
        let buffer = PixelBuffer::from_data(screen, vec![0; 6]).unwrap();
        let pixel = Point { x: 3, y: 0 };

        let result = buffer.pixel(pixel);

        assert_eq!(
            result,
            Err(PixelBufferError::PixelOutsideBounds { pixel, screen })
        );
    }

    #[test]
    fn test_rows_split_on_width() {
        let buffer = PixelBuffer::from_data(create_screen(3, 2), vec![1, 2, 3, 4, 5, 6]).unwrap();
        let rows: Vec<&[u32]> = buffer.rows().collect();

        assert_eq!(rows, vec![&[1, 2, 3][..], &[4, 5, 6][..]]);
    }
}
