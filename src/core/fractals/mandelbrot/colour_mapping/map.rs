use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;

pub trait MandelbrotColourMap: ColourMap {
    fn kind(&self) -> MandelbrotColourMapKinds;
}

impl ColourMap for Box<dyn MandelbrotColourMap> {
    fn map(&self, iterations: u32) -> Colour {
        (**self).map(iterations)
    }

    fn display_name(&self) -> &str {
        (**self).display_name()
    }
}
