use tracing_subscriber::EnvFilter;

/// Installs the fmt subscriber on stderr. `RUST_LOG` overrides the default
/// `info` level. Safe to call more than once.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
