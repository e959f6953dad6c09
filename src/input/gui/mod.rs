//! Windowed viewer: winit for the window and input, pixels for the surface.

pub mod app;
pub mod commands;
pub mod translate;
