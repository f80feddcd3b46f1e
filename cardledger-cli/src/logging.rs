use tracing_subscriber::{EnvFilter, fmt};

/// Install the stderr log subscriber.
///
/// Filters come from `RUST_LOG` (default `warn`); `--verbose` forces `debug`.
pub fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("logging initialized");
}
