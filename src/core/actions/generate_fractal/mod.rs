pub mod generate_fractal;
pub mod generate_fractal_parallel_scoped_threads;
pub mod generate_fractal_rayon;
pub mod ports;
