use std::num::NonZeroU32;
use std::thread;

use crate::core::actions::generate_fractal::generate_fractal::fill_rows;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::screen_size::ScreenSize;
use crate::core::util::calculate_bands::calculate_bands;

/// Splits the screen into horizontal bands, one scoped thread each. Bands
/// get `height / bands` rows and the last band takes the remainder.
pub fn generate_fractal_parallel_scoped_threads<Alg>(
    screen: ScreenSize,
    algorithm: &Alg,
    max_threads: NonZeroU32,
) -> Result<Vec<Alg::Success>, Alg::Failure>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Default + Clone + Send,
    Alg::Failure: Send,
{
    let width = screen.width() as usize;
    let num_bands = calculate_bands(max_threads, screen.height()) as usize;
    let band_rows = screen.height() as usize / num_bands;
    let mut results = vec![Alg::Success::default(); screen.pixel_count()];

    thread::scope(|scope| {
        let mut remaining = results.as_mut_slice();
        let mut handles = Vec::with_capacity(num_bands);

        for band in 0..num_bands {
            let rows = if band == num_bands - 1 {
                remaining.len() / width
            } else {
                band_rows
            };
            let (out, rest) = std::mem::take(&mut remaining).split_at_mut(rows * width);
            remaining = rest;

            let first_row = band * band_rows;
            handles.push(scope.spawn(move || fill_rows(screen, algorithm, first_row, out)));
        }

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
            .collect::<Result<Vec<()>, Alg::Failure>>()
    })?;

    Ok(results)
}
