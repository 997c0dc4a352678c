//! Development-time tracing for debugging santa.
//!
//! - `info`: participant count after loading names, rounds used per assignment.
//! - `debug`: each incomplete round and how many givers it left unmatched.
//! - `trace`: every participant whose retry budget ran out within a round.
//! - `warn`: round cap reached, or the output file could not be written.
//!
//! Assignments themselves go to the output file, never through tracing.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing subscriber for development logging.
///
/// Reads `RUST_LOG` env var. Defaults to `warn` if unset.
/// Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=santa=debug cargo run -- assign names.txt out.txt
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
