pub mod calculate_bands;
