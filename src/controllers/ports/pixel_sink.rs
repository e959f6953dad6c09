use crate::core::data::pixel_buffer::PixelBuffer;

/// Receives one complete frame per rendered step.
pub trait PixelSink {
    type Error: std::error::Error + Send + Sync + 'static;

    fn present(&mut self, buffer: &PixelBuffer) -> Result<(), Self::Error>;
}
