// Tracing subscriber setup

use tracing_subscriber::EnvFilter;

/// Initialize logging from CLI flags
///
/// `RUST_LOG` wins when set; otherwise `-q` maps to warn, `-v` to debug,
/// and the default is info.
pub fn init(verbose: bool, quiet: bool) {
    let default_level = if quiet {
        "warn"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
