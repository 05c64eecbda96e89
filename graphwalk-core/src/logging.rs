//! Structured logging using **tracing**.
//!
//! Library code emits events through the `tracing` macros; binaries decide
//! where they go by installing a subscriber. The JSON subscriber below keeps
//! stdout free for analysis output.

use tracing::{error, info};

/// Initializes the global tracing collector (subscriber).
///
/// Call this once at start-up. Output is JSON on stderr. A second call is a
/// no-op because a global subscriber is already installed.
///
/// # Environment Variables
/// - `RUST_LOG`: Controls log filtering (e.g., `RUST_LOG=graphwalk_core=debug`)
pub fn init_structured_logging() {
    let _ = tracing_subscriber::fmt()
        .json()
        .with_ansi(false)
        .with_level(true)
        .with_target(true)
        .with_current_span(true)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

/// Logs an info event.
pub fn log_info(message: &str) {
    info!(detail = %message);
}

/// Logs an error event.
pub fn log_error(message: &str) {
    error!(detail = %message);
}
