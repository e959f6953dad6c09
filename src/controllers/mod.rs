pub mod frame_loop;
pub mod frame_pacer;
pub mod interactive;
pub mod ports;
pub mod terminal;
