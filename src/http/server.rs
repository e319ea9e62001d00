//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the axum Router with the wildcard redirect route
//! - Wire up middleware (request tracing, request timeout)
//! - Bind the server to a listener and serve until shutdown
//!
//! # Design Decisions
//! - Routes use `any()`: method enforcement belongs to the dispatcher, which
//!   answers non-GET with the 405 plain-text body the response table requires
//! - Shutdown is signal-driven; connection draining is left to `axum::serve`

use std::time::Duration;

use axum::{routing::any, Router};
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::RedirectorConfig;
use crate::redirect::dispatch::redirect_handler;

/// HTTP server hosting the redirect dispatcher.
pub struct HttpServer {
    router: Router,
    config: RedirectorConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: RedirectorConfig) -> Self {
        let router = Self::build_router(&config);
        Self { router, config }
    }

    /// Build the axum router with all middleware layers.
    fn build_router(config: &RedirectorConfig) -> Router {
        Router::new()
            .route("/", any(redirect_handler))
            .route("/{*path}", any(redirect_handler))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &RedirectorConfig {
        &self.config
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
