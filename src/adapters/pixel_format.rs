//! Pixel format conversion helpers for presentation adapters.

use thiserror::Error;

use crate::core::data::colour::PackedColour;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("destination holds {dst_len} bytes, {pixels} pixels need {}", .pixels * 4)]
pub struct PixelFormatError {
    pub pixels: usize,
    pub dst_len: usize,
}

/// Unpacks `0x00RRGGBB` pixels into an RGBA8 frame with opaque alpha.
pub fn copy_xrgb_to_rgba(src: &[PackedColour], dst: &mut [u8]) -> Result<(), PixelFormatError> {
    if dst.len() != src.len() * 4 {
        return Err(PixelFormatError {
            pixels: src.len(),
            dst_len: dst.len(),
        });
    }

    for (&packed, dst_pixel) in src.iter().zip(dst.chunks_exact_mut(4)) {
        let [_, r, g, b] = packed.to_be_bytes();
        dst_pixel.copy_from_slice(&[r, g, b, 255]);
    }

    Ok(())
}
