use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;
use crate::core::fractals::mandelbrot::colour_maps::{PaletteTable, cyclic_lookup, rgb};

// dark red ramping through orange and yellow to pale yellow
const FIRE: PaletteTable = [
    rgb(0x3C0000),
    rgb(0x780000),
    rgb(0xB40000),
    rgb(0xF00000),
    rgb(0xFF1D00),
    rgb(0xFF4400),
    rgb(0xFF6B00),
    rgb(0xFF9200),
    rgb(0xFFAF00),
    rgb(0xFFC400),
    rgb(0xFFDA00),
    rgb(0xFFEF00),
    rgb(0xFFFF0F),
    rgb(0xFFFF4B),
    rgb(0xFFFF87),
    rgb(0xFFFFC3),
];

#[derive(Debug, Default)]
pub struct MandelbrotFirePalette;

impl ColourMap for MandelbrotFirePalette {
    fn map(&self, iterations: u32) -> Colour {
        cyclic_lookup(&FIRE, iterations)
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotFirePalette {
    fn kind(&self) -> MandelbrotColourMapKinds {
        MandelbrotColourMapKinds::Fire
    }
}
