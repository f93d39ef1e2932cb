//! Square gateway server binary.

use std::sync::Arc;

use square_gateway::adapters::http::{build_app, GatewayAppState};
use square_gateway::adapters::square::SquareClient;
use square_gateway::config::AppConfig;
use square_gateway::observability::init_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server.log_level, config.server.log_format)?;

    config.server.validate()?;
    if let Err(err) = config.square.validate() {
        // Liveness still works; Square calls will fail until this is fixed.
        tracing::warn!(error = %err, "Square configuration incomplete");
    }

    let square_client = SquareClient::new(&config.square);
    let state = GatewayAppState::new(
        Arc::new(square_client),
        config.square.location_id.clone(),
    );
    let app = build_app(state);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(
        %addr,
        square_env = config.square.environment.as_str(),
        square_base = config.square.base_url(),
        base_url = %config.server.public_base_url(),
        "Server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
