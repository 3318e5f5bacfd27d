//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound request headers
//!     → tracing.rs (extract parent context, start `process` span)
//!     → handler records span events
//!     → tracing.rs (inject context into downstream headers)
//!
//! Log events:
//!     → logging.rs (structured log lines via tracing-subscriber)
//! ```
//!
//! # Design Decisions
//! - The span is the unit of record: one span per request, ended exactly
//!   once on every exit path
//! - Log output is diagnostic only; the trace context is the contract

pub mod logging;
pub mod tracing;

pub use tracing::RelayTracer;
