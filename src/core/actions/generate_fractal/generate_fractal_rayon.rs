use rayon::prelude::*;

use crate::core::actions::generate_fractal::generate_fractal::fill_rows;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::screen_size::ScreenSize;

/// Generates fractal data one row per rayon task.
///
/// Runs on whichever pool is current; wrap in [`rayon::ThreadPool::install`]
/// to use a dedicated one.
pub fn generate_fractal_rayon<Alg>(
    screen: ScreenSize,
    algorithm: &Alg,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Default + Clone + Send,
    Alg::Failure: Send,
{
    let mut results = vec![Alg::Success::default(); screen.pixel_count()];

    results
        .par_chunks_mut(screen.width() as usize)
        .enumerate()
        .try_for_each(|(row, out)| fill_rows(screen, algorithm, row, out))?;

    Ok(results)
}
