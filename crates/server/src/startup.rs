use axum::Router;
use configs::AppConfig;
use dotenvy::dotenv;
use migration::MigratorTrait;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Binds `host:port`; host names are resolved, not only IP literals.
pub async fn bind(addr: &str) -> anyhow::Result<TcpListener> {
    Ok(TcpListener::bind(addr).await?)
}

/// Public entry: connect the store, build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();

    let cfg = AppConfig::load_or_env().map_err(|e| StartupError::InvalidConfig(format!("{e:#}")))?;

    let db = models::db::connect_with_config(&cfg.database).await?;
    if cfg.database.run_migrations {
        migration::Migrator::up(&db, None)
            .await
            .map_err(|e| StartupError::Migration(e.to_string()))?;
        info!(service = "server", event = "migrations_applied", "database schema up to date");
    }

    let state = ServerState::from_db(db);
    let app: Router = routes::build_router(state, build_cors());

    let listener = bind(&cfg.server.bind_addr()).await?;
    info!(addr = %listener.local_addr()?, "starting airline registry");
    axum::serve(listener, app).await?;
    Ok(())
}
