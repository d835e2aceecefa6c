mod app;
mod config;
mod routes;
mod types;
mod utils;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use crate::{config::Config, utils::logger::init_logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    init_logger(config.log_json);
    info!("Starting app...");

    let app = app::gen_app(config.datamall_config()).context("failed to build HTTP client")?;

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    info!("Listening on {}", config.bind);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
