use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use configs::{AppConfig, StoreBackend};
use migration::{Migrator, MigratorTrait};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use service::accounts::repo::MemoryAccountStore;

use crate::auth::RoleGate;
use crate::errors::StartupError;
use crate::routes::{self, AdminApi};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .map_err(|e| StartupError::InvalidConfig(format!("server address: {e}")))
}

/// Pick the store backend and wire the admin API to it.
pub async fn build_admin(cfg: &AppConfig) -> Result<AdminApi, StartupError> {
    match cfg.store.backend {
        StoreBackend::Memory => {
            warn!("using in-memory account store; data does not survive restarts");
            Ok(AdminApi::new(Arc::new(MemoryAccountStore::new())))
        }
        StoreBackend::Postgres => {
            let db = models::db::connect_with_config(&cfg.database).await?;
            if cfg.database.run_migrations {
                Migrator::up(&db, None)
                    .await
                    .map_err(|e| StartupError::Store(format!("migrations failed: {e}")))?;
                info!("database migrations applied");
            }
            Ok(AdminApi::from_connection(db))
        }
    }
}

pub fn build_app(cfg: &AppConfig, admin: &AdminApi) -> Router {
    let gate = RoleGate::new(&cfg.auth.jwt_secret, &cfg.auth.admin_role);
    routes::build_router(admin, gate, build_cors())
}

/// Public entry: build the app from a validated config and serve it.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let admin = build_admin(&cfg).await?;
    let app = build_app(&cfg, &admin);

    let addr = bind_addr(&cfg)?;
    info!(%addr, backend = ?cfg.store.backend, admin_role = %cfg.auth.admin_role, "starting account admin server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
