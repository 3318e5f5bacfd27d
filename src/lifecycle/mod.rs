//! Process lifecycle.
//!
//! Startup is plain: bind, serve. Shutdown is a broadcast signal the
//! server listens on; in production it is wired to Ctrl+C, in tests it
//! is triggered directly.

pub mod shutdown;

pub use shutdown::Shutdown;
