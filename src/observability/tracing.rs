//! Distributed tracing support.
//!
//! # Responsibilities
//! - Extract W3C trace context from incoming request headers
//! - Start the per-request `process` span parented to that context
//! - Inject the active context into downstream request headers
//!
//! # Design Decisions
//! - The tracer is an explicit object built from a provider at startup;
//!   no `opentelemetry::global` registration, no import-time side effects
//! - The active context travels as an explicit `Context` value through
//!   the handler call chain rather than a task-local lookup, so
//!   concurrent requests cannot cross-contaminate trace linkage
//! - Extraction never fails: absent or malformed headers yield a root
//!   context and the span simply starts a new trace

use axum::http::HeaderMap;
use opentelemetry::propagation::TextMapPropagator;
use opentelemetry::trace::{SpanKind, TraceContextExt, Tracer, TracerProvider as _};
use opentelemetry::Context;
use opentelemetry_http::{HeaderExtractor, HeaderInjector};
use opentelemetry_sdk::propagation::TraceContextPropagator;
use opentelemetry_sdk::trace::{SdkTracer, SdkTracerProvider};

/// Name of the span covering one relay request.
pub const PROCESS_SPAN: &str = "process";

/// Tracer for the relay's per-request spans.
///
/// Owns the OpenTelemetry tracer and the W3C propagator used for both
/// directions of header propagation.
pub struct RelayTracer {
    tracer: SdkTracer,
    propagator: TraceContextPropagator,
}

impl RelayTracer {
    /// Create a tracer from an explicitly constructed provider.
    pub fn new(provider: &SdkTracerProvider) -> Self {
        Self {
            tracer: provider.tracer("service-b-tracer"),
            propagator: TraceContextPropagator::new(),
        }
    }

    /// Extract the parent trace context from inbound headers.
    ///
    /// Absent or unparseable `traceparent` yields a root context.
    pub fn extract(&self, headers: &HeaderMap) -> Context {
        self.propagator
            .extract_with_context(&Context::new(), &HeaderExtractor(headers))
    }

    /// Start the `process` span parented to `parent` and return a context
    /// carrying it. The caller holds this context for the lifetime of the
    /// request and must end the span on every exit path.
    pub fn start_process_span(&self, parent: &Context) -> Context {
        let span = self
            .tracer
            .span_builder(PROCESS_SPAN)
            .with_kind(SpanKind::Server)
            .start_with_context(&self.tracer, parent);
        parent.with_span(span)
    }

    /// Inject `cx` into an outbound header set.
    ///
    /// A downstream receiver extracting these headers reconstructs the
    /// same trace lineage, with the relay's span as parent.
    pub fn inject(&self, cx: &Context, headers: &mut HeaderMap) {
        self.propagator
            .inject_context(cx, &mut HeaderInjector(headers));
    }
}
