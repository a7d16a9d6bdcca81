use anyhow::Context;
use seatmap_api::{app, AppState};
use seatmap_store::{app_config::Config, DbClient, MySqlFlightRepository};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seatmap_api=debug,seatmap_core=debug,seatmap_store=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting seat map API on port {}", config.server.port);

    let layouts = config.layout_registry().context("Invalid cabin layout in config")?;
    tracing::info!("{} cabin layouts registered", layouts.len());

    let db = DbClient::new(&config.database);
    if let Err(e) = db.ping().await {
        // Requests will answer 400 until the database is reachable.
        tracing::warn!("Database not reachable at startup: {}", e);
    }

    let app_state = AppState {
        flight_repo: Arc::new(MySqlFlightRepository::new(db.pool.clone())),
        layouts: Arc::new(layouts),
    };

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app(app_state)).await?;

    Ok(())
}
