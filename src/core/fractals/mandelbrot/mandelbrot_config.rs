use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
use crate::core::data::iteration_budget::IterationBudget;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::{MandelbrotAlgorithm, Precision};
use crate::core::fractals::mandelbrot::colour_mapping::factory::mandelbrot_colour_map_factory;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotColourMapKinds;
use crate::core::fractals::mandelbrot::colour_mapping::map::MandelbrotColourMap;
use crate::core::fractals::mandelbrot::escape_time::DEFAULT_ESCAPE_THRESHOLD;

pub const DEFAULT_MAX_ITERATIONS: u32 = 255;

/// Region shown by the static bounding-box projection.
pub fn default_region() -> Result<ComplexRect, ComplexRectError> {
    ComplexRect::new(Complex::new(-2.0, -1.0), Complex::new(1.0, 1.0))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotConfig {
    pub max_iterations: u32,
    /// Squared escape radius.
    pub threshold: f64,
    pub colour_map_kind: MandelbrotColourMapKinds,
    pub precision: Precision,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            threshold: DEFAULT_ESCAPE_THRESHOLD,
            colour_map_kind: MandelbrotColourMapKinds::default(),
            precision: Precision::default(),
        }
    }
}

impl MandelbrotConfig {
    #[must_use]
    pub fn build_algorithm(
        &self,
        viewport: Viewport,
        budget: IterationBudget,
    ) -> MandelbrotAlgorithm {
        MandelbrotAlgorithm::new(viewport, budget.current(), self.threshold, self.precision)
    }

    #[must_use]
    pub fn build_colour_map(&self) -> Box<dyn MandelbrotColourMap> {
        mandelbrot_colour_map_factory(self.colour_map_kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
    use crate::core::data::point::Point;
    use crate::core::data::screen_size::ScreenSize;

    #[test]
    fn test_defaults() {
        let config = MandelbrotConfig::default();

        assert_eq!(config.max_iterations, 255);
        assert_eq!(config.threshold, 4.0);
        assert_eq!(config.colour_map_kind, MandelbrotColourMapKinds::Ultra);
        assert_eq!(config.precision, Precision::Double);
    }

    #[test]
    fn test_default_region_bounds() {
        let region = default_region().unwrap();

        assert_eq!(region.min(), Complex::new(-2.0, -1.0));
        assert_eq!(region.max(), Complex::new(1.0, 1.0));
    }

    #[test]
    fn test_build_algorithm_uses_current_budget() {
        let screen = ScreenSize::new(4, 4).unwrap();
        let viewport = Viewport::centred(screen, Complex::new(0.0, 0.0), 0.5).unwrap();
        let budget = IterationBudget::with_current(12, 255);

        let algorithm = MandelbrotConfig::default().build_algorithm(viewport, budget);

        // the origin never escapes, so it runs to the budget
        assert_eq!(algorithm.compute(Point { x: 2, y: 2 }), Ok(12));
    }
}
