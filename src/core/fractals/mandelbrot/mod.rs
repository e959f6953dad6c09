pub mod algorithm;
pub mod colour_mapping;
pub mod colour_maps;
pub mod escape_time;
pub mod mandelbrot_config;
