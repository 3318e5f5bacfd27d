//! HTTP client for the downstream service.
//!
//! # Responsibilities
//! - Issue the single outbound POST with the relayed payload
//! - Carry the injected trace-propagation headers
//! - Classify failures for internal logging
//!
//! # Design Decisions
//! - Non-2xx responses are errors, same as transport failures; the
//!   handler collapses both to one caller-facing 500
//! - No timeout and no retries on the outbound call

use axum::http::HeaderMap;
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Outbound payload for the downstream service.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessPayload {
    /// The inbound `posts` value, unchanged. Absent stays absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posts: Option<Value>,
}

/// Error from the downstream call.
///
/// The distinction exists for logging only; callers surface every variant
/// identically.
#[derive(Debug, Error)]
pub enum DownstreamError {
    /// Connection, DNS, or protocol-level failure.
    #[error("downstream transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The downstream answered with a non-2xx status.
    #[error("downstream returned {status}: {body}")]
    Status { status: StatusCode, body: String },
}

/// Successful downstream response.
#[derive(Debug, Clone)]
pub struct DownstreamReply {
    /// HTTP status of the downstream response (always 2xx).
    pub status: StatusCode,

    /// Response body. JSON when the downstream sends JSON, otherwise the
    /// raw text wrapped as a JSON string.
    pub body: Value,
}

/// Client for the fixed downstream endpoint.
#[derive(Clone)]
pub struct DownstreamClient {
    client: reqwest::Client,
    url: String,
}

impl DownstreamClient {
    /// Create a client for the given endpoint URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    /// POST the payload with the given headers and await the reply.
    pub async fn post(
        &self,
        payload: &ProcessPayload,
        headers: HeaderMap,
    ) -> Result<DownstreamReply, DownstreamError> {
        let response = self
            .client
            .post(&self.url)
            .headers(headers)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DownstreamError::Status { status, body });
        }

        let text = response.text().await?;
        let body = match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(_) => Value::String(text),
        };

        Ok(DownstreamReply { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payload_omits_absent_posts() {
        let payload = ProcessPayload { posts: None };
        assert_eq!(serde_json::to_string(&payload).unwrap(), "{}");
    }

    #[test]
    fn test_payload_passes_posts_through() {
        let payload = ProcessPayload {
            posts: Some(json!(["a", "b"])),
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"posts": ["a", "b"]})
        );
    }
}
