use std::io::{self, Write};

use crate::controllers::ports::pixel_sink::PixelSink;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::PixelBuffer;

const INTERIOR: &[u8] = b"x ";
const EXTERIOR: &[u8] = b"  ";

/// Draws a frame as text, two characters per pixel: `x` where the point did
/// not escape, blank elsewhere.
#[derive(Debug)]
pub struct TextPresenter<W: Write> {
    out: W,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PixelSink for TextPresenter<W> {
    type Error = io::Error;

    fn present(&mut self, buffer: &PixelBuffer) -> Result<(), Self::Error> {
        let background = Colour::BACKGROUND.packed();

        for row in buffer.rows() {
            for &pixel in row {
                self.out
                    .write_all(if pixel == background { INTERIOR } else { EXTERIOR })?;
            }
            self.out.write_all(b"\n")?;
        }

        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::screen_size::ScreenSize;

    #[test]
    fn test_present_draws_interior_as_x() {
        let screen = ScreenSize::new(3, 2).unwrap();
        let pixels = vec![0, 0x421E0F, 0, 0x19071A, 0x19071A, 0];
        let buffer = PixelBuffer::from_data(screen, pixels).unwrap();
        let mut presenter = TextPresenter::new(Vec::new());

        presenter.present(&buffer).unwrap();

        assert_eq!(
            String::from_utf8(presenter.into_inner()).unwrap(),
            "x   x \n    x \n"
        );
    }
}
