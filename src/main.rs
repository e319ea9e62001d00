//! Binary entrypoint for the `go.lattice.dev` vanity import redirector.

use tokio::net::TcpListener;

use vanity_redirector::config;
use vanity_redirector::http::HttpServer;
use vanity_redirector::observability::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init("vanity_redirector=debug,tower_http=debug");

    tracing::info!("vanity-redirector v{} starting", env!("CARGO_PKG_VERSION"));

    let config = config::load_or_default()?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(address = %local_addr, "Listening for connections");

    let server = HttpServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
