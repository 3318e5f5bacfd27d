//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum router with the relay handler
//! - Wire up middleware (request tracing)
//! - Serve on a bound listener until shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::config::RelayConfig;
use crate::downstream::DownstreamClient;
use crate::http::handler::process_handler;
use crate::observability::RelayTracer;

/// Application state injected into the handler.
#[derive(Clone)]
pub struct AppState {
    /// Tracer for extract/start/inject operations.
    pub tracer: Arc<RelayTracer>,

    /// Client for the fixed downstream endpoint.
    pub downstream: DownstreamClient,

    /// Simulated-processing delay.
    pub delay: Duration,
}

/// HTTP server for the relay service.
pub struct RelayServer {
    router: Router,
}

impl RelayServer {
    /// Create a new server from configuration and an explicit tracer.
    pub fn new(config: RelayConfig, tracer: Arc<RelayTracer>) -> Self {
        let state = AppState {
            tracer,
            downstream: DownstreamClient::new(config.downstream.url),
            delay: Duration::from_millis(config.processing.delay_ms),
        };

        let router = Router::new()
            .route("/process", post(process_handler))
            .with_state(state)
            .layer(TraceLayer::new_for_http());

        Self { router }
    }

    /// Run the server on the given listener until the shutdown signal.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "Relay service listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("Relay service stopped");
        Ok(())
    }
}
