//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use opentelemetry_sdk::trace::{InMemorySpanExporter, SdkTracerProvider};
use serde_json::Value;
use tokio::net::TcpListener;

use trace_relay::config::RelayConfig;
use trace_relay::http::RelayServer;
use trace_relay::lifecycle::Shutdown;
use trace_relay::observability::RelayTracer;

/// One request as observed by the mock downstream.
#[derive(Debug, Clone)]
pub struct ReceivedRequest {
    pub headers: HeaderMap,
    pub body: Value,
}

#[derive(Clone)]
struct MockState {
    received: Arc<Mutex<Vec<ReceivedRequest>>>,
    status: StatusCode,
    body: Value,
}

async fn record_handler(
    State(state): State<MockState>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state
        .received
        .lock()
        .unwrap()
        .push(ReceivedRequest { headers, body });
    (state.status, Json(state.body.clone()))
}

/// Start a mock downstream service answering `POST /process` with a fixed
/// status and body. Returns the bound address and the request log.
pub async fn start_mock_downstream(
    status: u16,
    body: Value,
) -> (SocketAddr, Arc<Mutex<Vec<ReceivedRequest>>>) {
    let received = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        received: received.clone(),
        status: StatusCode::from_u16(status).unwrap(),
        body,
    };

    let app = Router::new()
        .route("/process", post(record_handler))
        .with_state(state);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    (addr, received)
}

/// A relay instance under test.
#[allow(dead_code)]
pub struct TestRelay {
    pub addr: SocketAddr,
    pub exporter: InMemorySpanExporter,
    pub shutdown: Shutdown,
    // Held so span export stays wired for the test's lifetime.
    pub provider: SdkTracerProvider,
}

/// Start a relay on an ephemeral port with an in-memory span exporter.
pub async fn start_relay(downstream_url: String, delay_ms: u64) -> TestRelay {
    let exporter = InMemorySpanExporter::default();
    let provider = SdkTracerProvider::builder()
        .with_simple_exporter(exporter.clone())
        .build();
    let tracer = Arc::new(RelayTracer::new(&provider));

    let mut config = RelayConfig::default();
    config.downstream.url = downstream_url;
    config.processing.delay_ms = delay_ms;

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    config.listener.bind_address = addr.to_string();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = RelayServer::new(config, tracer);

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    TestRelay {
        addr,
        exporter,
        shutdown,
        provider,
    }
}
