//! Development-time tracing for debugging devboot.
//!
//! # Separation of Concerns
//!
//! - **Tracing (this module)**: Dev diagnostics via `RUST_LOG`, output to stderr.
//!   Not part of devboot's product output.
//!
//! - **Progress messages (`main`)**: The "Activating ...", "Loading ..." lines
//!   shown to the user on stderr. Silenced by `--quiet`, unaffected by `RUST_LOG`.
//!
//! Stdout is reserved for the statements the invoking shell evaluates.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing subscriber for development logging.
///
/// Reads `RUST_LOG` env var. Defaults to `warn` if unset.
/// Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=devboot=debug devboot --base-dir ~/mlb-agent-lab
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
