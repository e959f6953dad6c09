use std::process::ExitCode;

use mandelbrot_viewer::{DEFAULT_CONFIG_PATH, RunGuiCommand, init_logging, load_config};
use tracing::error;

fn main() -> ExitCode {
    init_logging();

    let config = load_config(DEFAULT_CONFIG_PATH);

    match RunGuiCommand::new(config).execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
