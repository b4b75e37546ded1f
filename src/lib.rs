pub mod api;
pub mod config;
pub mod db;
pub mod diagnosis;
pub mod models;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::api::{start_api_server, ApiContext};
use crate::db::PatientStore;
use crate::diagnosis::{DiagnosisEngine, KnowledgeBase};

/// Initialize the service and serve the API until interrupted.
pub async fn run() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    // Knowledge base: external JSON file when configured, else built-in.
    // A bad file aborts startup rather than serving with partial rules.
    let knowledge = match config::knowledge_file() {
        Some(path) => KnowledgeBase::load(&path).map_err(|e| e.to_string())?,
        None => KnowledgeBase::builtin(),
    };
    tracing::info!(conditions = knowledge.len(), "Knowledge base initialized");

    let data_dir = config::app_data_dir();
    std::fs::create_dir_all(&data_dir)
        .map_err(|e| format!("Cannot create {}: {e}", data_dir.display()))?;
    let conn = db::open_database(&config::database_path()).map_err(|e| e.to_string())?;

    let ctx = ApiContext::new(
        Arc::new(PatientStore::new(conn)),
        Arc::new(DiagnosisEngine::new(Arc::new(knowledge))),
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], config::api_port()));
    let mut server = start_api_server(ctx, addr).await?;
    tracing::info!("Serving on http://{}", server.addr);

    tokio::signal::ctrl_c()
        .await
        .map_err(|e| format!("Failed to listen for shutdown signal: {e}"))?;
    server.shutdown();

    Ok(())
}
