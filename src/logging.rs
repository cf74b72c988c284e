//! Diagnostic logging via `tracing`.
//!
//! Diagnostics are written to stderr and are off unless `--verbose` is
//! passed or `RUST_LOG` is set, so they never interleave with the chat.

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Safe to call more than once.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("aduan_cli=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!crate::output::is_no_color())
        .with_target(false)
        .try_init();
}
