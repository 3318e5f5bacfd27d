//! Configuration subsystem.
//!
//! # Responsibilities
//! - Define the relay configuration schema
//! - Provide the fixed production defaults
//!
//! # Design Decisions
//! - No loader: the relay is a fixed two-hop topology, so configuration
//!   is constructed in code rather than read from disk or environment

pub mod schema;

pub use schema::{DownstreamConfig, ListenerConfig, ProcessingConfig, RelayConfig};
