mod app;
mod config;
mod records;
mod rows;
mod state;

use anyhow::Context;
use config::{Config, DEFAULT_CONFIG_PATH};
use state::AppState;
use std::sync::Arc;
use tokio::signal;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let (config_path, explicit) = match std::env::var("BILLING_ROWS_CONFIG") {
        Ok(path) => (path, true),
        Err(_) => (DEFAULT_CONFIG_PATH.to_string(), false),
    };
    let cfg = Config::load(&config_path, explicit)?;

    let state = Arc::new(AppState::from_config(&cfg)?);
    let addr = state.listen;
    let app = app::router(state);

    info!(%addr, "Starting billing-rows");

    let server = axum::Server::try_bind(&addr)
        .with_context(|| format!("binding {}", addr))?
        .serve(app.into_make_service());

    let graceful = server.with_graceful_shutdown(shutdown_signal());
    graceful.await?;
    Ok(())
}

async fn shutdown_signal() {
    let _ = signal::ctrl_c().await;
    info!("Shutdown signal received");
}
