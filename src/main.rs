//! Relay service binary.
//!
//! Bootstraps logging, constructs the tracer provider explicitly, binds
//! the listener, and runs the server until Ctrl+C.

use std::sync::Arc;

use opentelemetry_sdk::trace::SdkTracerProvider;
use tokio::net::TcpListener;

use trace_relay::config::RelayConfig;
use trace_relay::http::RelayServer;
use trace_relay::lifecycle::Shutdown;
use trace_relay::observability::{logging, RelayTracer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    tracing::info!("Initializing relay service");

    let config = RelayConfig::default();
    tracing::info!(
        bind_address = %config.listener.bind_address,
        downstream_url = %config.downstream.url,
        delay_ms = config.processing.delay_ms,
        "Configuration loaded"
    );

    // Tracer provider built once at startup and handed to the server;
    // span export wiring is a deployment concern.
    let provider = SdkTracerProvider::builder().build();
    let tracer = Arc::new(RelayTracer::new(&provider));

    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
            shutdown.trigger();
        }
    });

    let server = RelayServer::new(config, tracer);
    server.run(listener, server_shutdown).await?;

    provider.shutdown()?;
    tracing::info!("Shutdown complete");
    Ok(())
}
