use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::screen_size::ScreenSize;

pub fn generate_fractal<Alg: FractalAlgorithm>(
    screen: ScreenSize,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure> {
    (0..screen.pixel_count())
        .map(|index| algorithm.compute(screen.point_at(index)))
        .collect()
}

/// Computes whole rows into `out`, starting at row `first_row`.
/// `out.len()` must be a multiple of the screen width.
pub(crate) fn fill_rows<Alg: FractalAlgorithm>(
    screen: ScreenSize,
    algorithm: &Alg,
    first_row: usize,
    out: &mut [Alg::Success],
) -> Result<(), Alg::Failure> {
    let start = first_row * screen.width() as usize;

    for (offset, slot) in out.iter_mut().enumerate() {
        *slot = algorithm.compute(screen.point_at(start + offset))?;
    }

    Ok(())
}
