use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;
use crate::core::fractals::mandelbrot::colour_maps::{PaletteTable, cyclic_lookup, rgb};

// brown through deep blue to white and back to amber
const ULTRA: PaletteTable = [
    rgb(0x421E0F),
    rgb(0x19071A),
    rgb(0x09012F),
    rgb(0x040449),
    rgb(0x000764),
    rgb(0x0C2C8A),
    rgb(0x1852B1),
    rgb(0x397DD1),
    rgb(0x86B5E5),
    rgb(0xD3ECF8),
    rgb(0xF1E9BF),
    rgb(0xF8C95F),
    rgb(0xFFAA00),
    rgb(0xCC8000),
    rgb(0x995700),
    rgb(0x6A3403),
];

#[derive(Debug, Default)]
pub struct MandelbrotUltraPalette;

impl ColourMap for MandelbrotUltraPalette {
    fn map(&self, iterations: u32) -> Colour {
        cyclic_lookup(&ULTRA, iterations)
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl MandelbrotColourMap for MandelbrotUltraPalette {
    fn kind(&self) -> MandelbrotColourMapKinds {
        MandelbrotColourMapKinds::Ultra
    }
}
