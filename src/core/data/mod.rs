pub mod colour;
pub mod complex;
pub mod complex_rect;
pub mod iteration_budget;
pub mod pixel_buffer;
pub mod point;
pub mod screen_size;
pub mod shader_uniforms;
pub mod viewport;
