pub mod pixel_sink;
pub mod uniform_sink;
