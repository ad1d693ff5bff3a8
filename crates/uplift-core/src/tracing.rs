//! Tracing subscriber setup shared by every Uplift entry point.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `uplift_transform=debug`.
pub const LOG_ENV: &str = "UPLIFT_LOG";

/// Log level used when `UPLIFT_LOG` is unset.
pub fn default_level(quiet: bool, verbose: bool) -> &'static str {
    if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Install a stderr `fmt` subscriber. `UPLIFT_LOG` overrides `level`.
pub fn init(level: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
}
