use std::num::NonZeroU32;

/// Number of horizontal bands to split `height` rows into: at most
/// `max_bands`, at least two rows per band, never zero.
#[must_use]
pub fn calculate_bands(max_bands: NonZeroU32, height: u32) -> u32 {
    max_bands.get().min(height / 2).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bands(max: u32, height: u32) -> u32 {
        calculate_bands(NonZeroU32::new(max).unwrap(), height)
    }

    #[test]
    fn test_short_screens_give_one_band() {
        assert_eq!(bands(10, 1), 1);
        assert_eq!(bands(10, 2), 1);
        assert_eq!(bands(10, 3), 1);
    }

    #[test]
    fn bands_do_not_exceed_half_height() {
        assert_eq!(bands(10, 6), 3);
        assert_eq!(bands(10, 7), 3);
        assert_eq!(bands(3, 6), 3);
    }

    #[test]
    fn bands_correctly_calculated() {
        assert_eq!(bands(4, 20), 4);
        assert_eq!(bands(5, 20), 5);
        assert_eq!(bands(8, 600), 8);
    }
}
