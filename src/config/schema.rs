//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the relay.
//! All types derive Serde traits, but there is no file or environment
//! loading surface: the topology is fixed and the defaults carry the
//! production values. Tests construct the struct directly and override
//! addresses.

use serde::{Deserialize, Serialize};

/// Root configuration for the relay service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RelayConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Downstream service endpoint.
    pub downstream: DownstreamConfig,

    /// Simulated-processing settings.
    pub processing: ProcessingConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3003").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3003".to_string(),
        }
    }
}

/// Downstream service configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DownstreamConfig {
    /// Full URL of the downstream processing endpoint.
    pub url: String,
}

impl Default for DownstreamConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:3004/process".to_string(),
        }
    }
}

/// Simulated-processing configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Fixed delay applied before the downstream call, in milliseconds.
    pub delay_ms: u64,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self { delay_ms: 2000 }
    }
}
