//! Structured logging setup.
//!
//! # Responsibilities
//! - Install the process-wide `tracing` subscriber
//! - Honor `RUST_LOG` with a sensible default filter
//!
//! # Design Decisions
//! - Log lines are observability aids only, not part of the relay's
//!   functional contract

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber for the process.
pub fn init() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trace_relay=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
