//! jrnl-api - Journal upsert service
//!
//! Exposes the day-entry upsert and listing operations over HTTP, backed by
//! a remote search-only document store.

use anyhow::{Context, Result};
use clap::Parser;
use jrnl_api::store::HttpDocumentStore;
use jrnl_api::{build_router, AppState};
use jrnl_common::config::{self, ConfigOverrides};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "jrnl-api")]
#[command(about = "Journal upsert service over a remote document store")]
#[command(version)]
struct Args {
    /// Path to TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Remote store base URL
    #[arg(long)]
    store_url: Option<String>,

    /// Remote store access token
    #[arg(long)]
    store_token: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Default log directive when RUST_LOG is unset (e.g. "debug")
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config_path = args.config.clone().or_else(config::default_config_path);
    let toml_config = match &config_path {
        Some(path) => config::load_toml_config(path)?,
        None => Default::default(),
    };

    let overrides = ConfigOverrides {
        store_url: args.store_url,
        api_token: args.store_token,
        port: args.port,
        log_level: args.log_level,
    };
    let service_config = config::resolve(&overrides, &toml_config)?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| service_config.log_level.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(
        "Starting jrnl-api v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );
    if let Some(path) = &config_path {
        info!("Config file: {}", path.display());
    }
    info!("Remote store: {}", service_config.store_url);

    let store = HttpDocumentStore::new(
        &service_config.store_url,
        service_config.api_token.clone(),
        service_config.timeout,
    )
    .context("Failed to build remote store client")?;

    let app = build_router(AppState::new(Arc::new(store)));

    let addr = SocketAddr::from(([127, 0, 0, 1], service_config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;
    info!("jrnl-api listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        },
    }
}
