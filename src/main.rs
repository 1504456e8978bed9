mod adapters;
mod auth;
mod config;
mod domain;
mod error;
mod ports;
mod routes;
mod state;
mod utils;

use anyhow::Context;
use config::AppConfig;
use state::AppState;
use tokio::net::TcpListener;
use tokio::signal;

/// Initialize the application
///
/// Loads configuration and prepares the on-disk layout.
async fn initialize_app() -> anyhow::Result<(AppConfig, AppState)> {
    if let Err(e) = dotenvy::dotenv() {
        log::debug!("No .env file loaded: {}", e);
    }

    let config = AppConfig::from_env().context("failed to load configuration")?;

    utils::audio_file::prepare_upload_dir(&config.upload_dir)
        .await
        .with_context(|| format!("failed to create {}", config.upload_dir.display()))?;

    let state = AppState::from_config(&config).context("failed to build application state")?;

    log::info!(
        "Minutes stored in {}, uploads in {}",
        config.minutes_path.display(),
        config.upload_dir.display()
    );
    if config.strict_errors {
        log::info!("Strict error statuses enabled");
    }

    Ok((config, state))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (config, state) = initialize_app().await?;
    let app = routes::router(state);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    log::info!("Server running on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    log::info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            log::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        log::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                log::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                log::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
