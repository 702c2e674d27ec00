//! Server binary: configuration, schema init, serve until shutdown.

use goods_api::{build_app, ensure_database_exists, AppState, ConsoleLog, Settings, Store};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

const BIND_ADDR: &str = "0.0.0.0:8000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("goods_api=info")),
        )
        .init();

    let settings = Settings::from_env()?;
    ensure_database_exists(&settings).await?;
    let store = Store::connect(&settings).await?;
    store.init_schema().await?;

    let state = AppState {
        store: store.clone(),
        log: Arc::new(ConsoleLog),
    };
    let app = build_app(state);

    let listener = TcpListener::bind(BIND_ADDR).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.close().await;
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    tracing::info!("shutdown signal received");
}
