use std::{future::Future, sync::Arc};

use axum::Router;
use configs::{AppConfig, DatabaseConfig, StoreKind};
use sea_orm::DatabaseConnection;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

use crate::errors::StartupError;
use crate::routes::{self, ServerState};
use service::{
    isme::{
        repo::seaorm::SeaOrmIsMeStore, repository::memory::MemoryIsMeStore, IsMeStore,
        MembershipService,
    },
    runtime,
};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// The store picked from `database.url`, plus the SQL connection when there is one
/// so the caller can close it on shutdown.
pub struct OpenedStore {
    pub store: Arc<dyn IsMeStore>,
    pub db: Option<DatabaseConnection>,
}

/// Connect to the store named by the config. SQL stores are migrated first.
pub async fn open_store(cfg: &DatabaseConfig) -> Result<OpenedStore, StartupError> {
    let kind = cfg.store_kind().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    match kind {
        StoreKind::Memory => {
            info!(store = "memory", "using in-memory store; records are lost on exit");
            Ok(OpenedStore { store: Arc::new(MemoryIsMeStore::new()), db: None })
        }
        StoreKind::Postgres | StoreKind::Sqlite => {
            let db = models::db::connect_and_migrate(cfg)
                .await
                .map_err(|e| StartupError::Store(e.to_string()))?;
            info!(store = ?kind, "database store ready");
            Ok(OpenedStore { store: Arc::new(SeaOrmIsMeStore::new(db.clone())), db: Some(db) })
        }
    }
}

/// Build the app router around an already opened store.
pub fn build_app(store: Arc<dyn IsMeStore>, public_dir: &str) -> Router {
    let state = ServerState::new(MembershipService::new(store));
    routes::build_router(state, build_cors(), public_dir)
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, shutting down");
}

/// Load the validated config; a missing or unusable store URL is fatal.
/// `.env` has already been applied by the binary.
pub fn load_config() -> Result<AppConfig, StartupError> {
    AppConfig::load_and_validate().map_err(|e| StartupError::InvalidConfig(e.to_string()))
}

/// Public entry: serve with the given config until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    run_with_shutdown(cfg, shutdown_signal()).await
}

/// Serve with an already validated config until `shutdown` resolves,
/// then drain in-flight requests and close the store connection.
pub async fn run_with_shutdown<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    runtime::ensure_env(&cfg.server.public_dir).await?;

    let OpenedStore { store, db } = open_store(&cfg.database).await?;
    let app = build_app(store, &cfg.server.public_dir);

    let listener = tokio::net::TcpListener::bind(cfg.server.bind_addr()).await?;
    info!(addr = %listener.local_addr()?, "starting isme server");
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;

    if let Some(db) = db {
        db.close().await?;
        info!("database connection closed");
    }
    Ok(())
}
