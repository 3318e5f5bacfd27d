//! Trace-propagating HTTP relay ("Service B").
//!
//! A single intermediary service in a multi-service chain:
//!
//! ```text
//!   Caller ──POST /process──▶ ┌───────────────────────────────┐
//!                             │          RELAY                │
//!                             │  extract parent trace context │
//!                             │  start `process` span         │
//!                             │  simulated delay              │
//!                             │  inject context into headers  │──POST /process──▶ Downstream
//!   Caller ◀──200 body / 500──│  relay response or collapse   │◀────────────────  ("Service C")
//!                             │  failure, end span            │
//!                             └───────────────────────────────┘
//! ```
//!
//! Exactly one span per request, ended on every exit path; the outbound
//! call always carries W3C trace-context headers derived from it.

pub mod config;
pub mod downstream;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::RelayConfig;
pub use http::RelayServer;
pub use lifecycle::Shutdown;
pub use observability::RelayTracer;
