use anyhow::Context;
use canteen_queue::api::{create_router, AppState};
use canteen_queue::config::Config;
use canteen_queue::lifecycle::{setup_tracing, CanteenSystem};
use std::net::SocketAddr;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();

    let config = Config::load()?;
    let system = CanteenSystem::new(&config)?;

    let app = create_router(AppState {
        orders: system.order_client.clone(),
        crowd: system.crowd.clone(),
    });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "Backend listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    system.shutdown().await?;
    info!("Application stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
