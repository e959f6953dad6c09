use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};
use crate::core::data::screen_size::ScreenSize;

/// Colours escape counts rendered with a budget of `budget` iterations.
/// Counts that reached the budget did not escape and become background.
pub fn generate_pixel_buffer<CMap: ColourMap + ?Sized>(
    iterations: &[u32],
    budget: u32,
    colour_map: &CMap,
    screen: ScreenSize,
) -> Result<PixelBuffer, PixelBufferError> {
    let pixels: PixelBufferData = iterations
        .iter()
        .map(|&k| {
            if k >= budget {
                Colour::BACKGROUND.packed()
            } else {
                colour_map.map(k).packed()
            }
        })
        .collect();

    PixelBuffer::from_data(screen, pixels)
}
