use pixels::{Pixels, SurfaceTexture, TextureError};
use thiserror::Error;
use winit::window::Window;

use crate::adapters::pixel_format::{PixelFormatError, copy_xrgb_to_rgba};
use crate::controllers::ports::pixel_sink::PixelSink;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::screen_size::ScreenSize;

#[derive(Debug, Error)]
pub enum PixelsPresenterError {
    #[error("pixels surface error: {0}")]
    Pixels(#[from] pixels::Error),
    #[error("pixels texture error: {0}")]
    Texture(#[from] TextureError),
    #[error(transparent)]
    Format(#[from] PixelFormatError),
}

/// Shows frames in a window. The buffer keeps the session's screen size and
/// the surface scales it to whatever size the window has.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    screen: ScreenSize,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window, screen: ScreenSize) -> Result<Self, PixelsPresenterError> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(screen.width(), screen.height(), surface_texture)?;

        Ok(Self { pixels, screen })
    }

    #[must_use]
    pub fn screen(&self) -> ScreenSize {
        self.screen
    }

    pub fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), PixelsPresenterError> {
        // minimised windows report 0x0
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)?;
        Ok(())
    }
}

impl PixelSink for PixelsPresenter {
    type Error = PixelsPresenterError;

    fn present(&mut self, buffer: &PixelBuffer) -> Result<(), Self::Error> {
        copy_xrgb_to_rgba(buffer.pixels(), self.pixels.frame_mut())?;
        self.pixels.render()?;

        Ok(())
    }
}
