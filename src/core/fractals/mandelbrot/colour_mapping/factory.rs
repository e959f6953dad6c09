use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;
use crate::core::fractals::mandelbrot::colour_maps::fire::MandelbrotFirePalette;
use crate::core::fractals::mandelbrot::colour_maps::ultra::MandelbrotUltraPalette;

#[must_use]
pub fn mandelbrot_colour_map_factory(
    kind: MandelbrotColourMapKinds,
) -> Box<dyn MandelbrotColourMap> {
    match kind {
        MandelbrotColourMapKinds::Ultra => Box::new(MandelbrotUltraPalette),
        MandelbrotColourMapKinds::Fire => Box::new(MandelbrotFirePalette),
    }
}
