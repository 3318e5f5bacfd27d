//! HTTP subsystem.
//!
//! # Responsibilities
//! - Accept inbound `POST /process` requests
//! - Drive the relay handler for each request
//!
//! # Design Decisions
//! - One route, one handler; the relay has no other surface
//! - No inbound request timeout: the simulated delay plus the untimed
//!   downstream call bound each request's lifetime

pub mod handler;
pub mod server;

pub use server::{AppState, RelayServer};
