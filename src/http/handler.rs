//! The relay handler.
//!
//! # Responsibilities
//! - Extract the inbound trace context and start the `process` span
//! - Simulate processing with a fixed delay
//! - Forward the `posts` payload downstream with injected trace headers
//! - Relay the downstream body, or collapse any failure to a 500
//!
//! # Design Decisions
//! - The span context is an explicit local value; it is never installed
//!   in ambient task-local storage
//! - The span ends exactly once on every exit path, before the response
//!   is produced
//! - `posts` is not validated: an absent field is forwarded as an absent
//!   field, and its element type is opaque
//! - A successful downstream call always yields a relay-level 200, even
//!   if the downstream status was another 2xx code

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use opentelemetry::trace::{Status, TraceContextExt};
use opentelemetry::KeyValue;
use serde::Deserialize;
use serde_json::Value;

use crate::downstream::ProcessPayload;
use crate::http::server::AppState;

/// Inbound request body. Only `posts` is meaningful; anything else is
/// ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ProcessRequest {
    /// Opaque items to relay downstream. Optional by contract.
    #[serde(default)]
    pub posts: Option<Value>,
}

/// Handle one relay request end to end.
pub async fn process_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(request): Json<ProcessRequest>,
) -> Response {
    let parent_cx = state.tracer.extract(&headers);
    tracing::debug!(
        remote_parent = parent_cx.span().span_context().is_valid(),
        "Received process request"
    );

    let cx = state.tracer.start_process_span(&parent_cx);
    cx.span().add_event("Processing started", vec![]);

    // Simulated work; not cancellable once the handler has begun.
    tokio::time::sleep(state.delay).await;

    let payload = ProcessPayload {
        posts: request.posts,
    };

    let mut outbound_headers = HeaderMap::new();
    state.tracer.inject(&cx, &mut outbound_headers);

    match state.downstream.post(&payload, outbound_headers).await {
        Ok(reply) => {
            cx.span().add_event(
                "Service C response received",
                vec![
                    KeyValue::new("status", reply.status.as_u16() as i64),
                    KeyValue::new("data", reply.body.to_string()),
                ],
            );
            cx.span().add_event("Processing completed", vec![]);
            cx.span().set_status(Status::Ok);
            cx.span().end();

            (StatusCode::OK, Json(reply.body)).into_response()
        }
        Err(error) => {
            tracing::error!(error = %error, "Error calling downstream service");
            cx.span().set_status(Status::error("Processing failed"));
            cx.span().end();

            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}
