/// Packed `0x00RRGGBB` pixel, the layout of every [`PixelBuffer`] entry.
///
/// [`PixelBuffer`]: crate::core::data::pixel_buffer::PixelBuffer
pub type PackedColour = u32;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    /// Colour of points that did not escape within the budget.
    pub const BACKGROUND: Colour = Colour { r: 0, g: 0, b: 0 };

    #[must_use]
    pub const fn from_packed(packed: PackedColour) -> Self {
        Self {
            r: (packed >> 16) as u8,
            g: (packed >> 8) as u8,
            b: packed as u8,
        }
    }

    #[must_use]
    pub const fn packed(self) -> PackedColour {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}
