use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use skybook_api::{app, AppState};
use skybook_store::{app_config::Config, JsonFlightRepository, JsonStorage, Session};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skybook_api=debug,skybook_store=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting SkyBook API on port {}", config.server.port);

    let flight_repo = JsonFlightRepository::load(&config.catalog.path)
        .await
        .with_context(|| format!("Failed to load flight catalog {}", config.catalog.path))?;

    let session = Session::load(JsonStorage::new(&config.storage.dir)).await;
    let app_state = AppState::new(Arc::new(flight_repo), session, config.seatmap.max_cols);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(app_state.clone()))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    app_state.shutdown().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
