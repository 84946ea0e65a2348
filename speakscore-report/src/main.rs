//! speakscore-report - assessment score report server
//!
//! Serves `/api/assessment` (the enriched score report) and the dashboard
//! page that renders it.

use anyhow::{Context, Result};
use clap::Parser;
use speakscore_common::config::{default_config_path, ServerConfig, TomlConfig};
use speakscore_report::cli::Args;
use speakscore_report::{build_router, AppState};
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // TOML is read before tracing exists so its log level can seed the filter;
    // load problems are reported once logging is up.
    let config_path = args.config.clone().or_else(default_config_path);
    let (toml_config, toml_problem) = match config_path.as_deref().map(TomlConfig::load) {
        Some(Ok(config)) => (config, None),
        Some(Err(e)) => (TomlConfig::default(), Some(e)),
        None => (TomlConfig::default(), None),
    };
    let config = ServerConfig::resolve(args.overrides(), &toml_config);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "speakscore_report={level},speakscore_common={level},tower_http={level}",
                    level = config.log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Build identification first, before anything that can fail
    info!(
        "Starting SpeakScore report server v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    if let Some(e) = toml_problem {
        warn!("{} - using defaults", e);
    }

    info!("Assessment data file: {}", config.data_file.display());
    if !config.data_file.exists() {
        warn!(
            "Assessment data file does not exist yet; /api/assessment will return 500 until it does"
        );
    }

    let app = build_router(AppState::new(config.data_file.clone()));

    let addr = config.listen_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("Server running at http://{}", addr);

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
            warn!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
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
