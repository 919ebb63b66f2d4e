//! Main entry point for the Kursverwaltung overview server

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

use anyhow::Context;
use clap::Parser;
use kurs_api::{AppState, build_router, load_config};
use kurs_core::init_logging;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};

/// Command line interface of the overview server
#[derive(Debug, Parser)]
#[command(
    name = "kurs-api-server",
    version = env!("CARGO_PKG_VERSION"),
    about = "Serves the Kursverwaltung overview as JSON"
)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Host to bind to, overrides the configuration
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on, overrides the configuration
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("Note: .env file not loaded: {e}");
    }

    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref(), cli.host, cli.port)
        .context("Failed to load configuration")?;

    init_logging(&config.logging)?;

    info!(
        "Kursverwaltung overview server v{} starting on {}:{}",
        env!("CARGO_PKG_VERSION"),
        config.server.host,
        config.server.port
    );

    let state = AppState::new(config.clone()).context("Failed to set up data service client")?;
    info!("Reading records from {}", config.data_service.base_url);

    let app = build_router(Arc::new(state));

    let listener = TcpListener::bind((config.server.host.as_str(), config.server.port))
        .await
        .with_context(|| {
            format!(
                "Failed to bind to {}:{}",
                config.server.host, config.server.port
            )
        })?;

    info!("Overview: http://{}/api/overview", listener.local_addr()?);
    info!("Health:   http://{}/health", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Resolve on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, shutting down gracefully...");
        },
        () = terminate => {
            info!("Received terminate signal, shutting down gracefully...");
        },
    }
}
