//! Curriculum Engine HTTP server.

use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use curriculum_engine::adapters::{
    api_router, AppState, FileProgramRepository, FileProgressRepository,
    InMemoryProgramRepository, InMemoryProgressRepository,
};
use curriculum_engine::config::{AppConfig, ConfigValidationError, StorageBackend, StorageConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);

    if let Err(e) = config.validate() {
        error!("Configuration error: {}", e);
        std::process::exit(1);
    }

    let state = build_state(&config.storage)?;
    let app = api_router(state, config.server.request_timeout());

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        %addr,
        storage = ?config.storage.backend,
        "Curriculum engine listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.server.log_level.clone().into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn build_state(storage: &StorageConfig) -> Result<AppState, ConfigValidationError> {
    match storage.backend {
        StorageBackend::Memory => Ok(AppState::new(
            Arc::new(InMemoryProgramRepository::new()),
            Arc::new(InMemoryProgressRepository::new()),
        )),
        StorageBackend::File => {
            let data_dir = storage
                .data_dir
                .as_ref()
                .ok_or(ConfigValidationError::MissingRequired("storage.data_dir"))?;
            info!(data_dir = %data_dir.display(), "Using file storage");
            Ok(AppState::new(
                Arc::new(FileProgramRepository::new(data_dir)),
                Arc::new(FileProgressRepository::new(data_dir)),
            ))
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
