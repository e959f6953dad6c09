use std::io;
use std::process::ExitCode;

use tracing::error;

fn main() -> ExitCode {
    mandelbrot_viewer::init_logging();

    match mandelbrot_viewer::terminal_controller(io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
