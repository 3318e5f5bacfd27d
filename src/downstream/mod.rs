//! Downstream service integration.
//!
//! The downstream service is an opaque HTTP collaborator: the relay
//! forwards a payload to its fixed endpoint and relays whatever comes
//! back. No health checking, no pooling policy beyond reqwest defaults.

pub mod client;

pub use client::{DownstreamClient, DownstreamError, DownstreamReply, ProcessPayload};
