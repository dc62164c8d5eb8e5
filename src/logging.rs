//! Diagnostic logging setup for the `cb9` binary
//!
//! Events go to stderr so they never mix with styled stdout output.
//! The filter is read from `CB9_LOG` (e.g. `CB9_LOG=cb9_style=debug`).

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "CB9_LOG";

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Build the filter: `CB9_LOG` when set and valid, otherwise by verbosity
pub fn filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)))
}

/// Install the global subscriber; a second call is a no-op
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
