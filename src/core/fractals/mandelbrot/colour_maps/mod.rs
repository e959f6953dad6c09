use crate::core::data::colour::Colour;

pub mod fire;
pub mod ultra;

pub const PALETTE_SIZE: usize = 16;

pub type PaletteTable = [Colour; PALETTE_SIZE];

/// `table[k mod N]`.
#[inline]
#[must_use]
pub fn cyclic_lookup(table: &PaletteTable, iterations: u32) -> Colour {
    table[iterations as usize % PALETTE_SIZE]
}

#[must_use]
pub(crate) const fn rgb(packed: u32) -> Colour {
    Colour::from_packed(packed)
}
