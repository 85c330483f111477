use std::net::SocketAddr;

use configs::AppConfig;
use migration::{Migrator, MigratorTrait};
use service::auth::{TokenConfig, TokenDecoder};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::ServerState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

pub fn token_decoder(cfg: &AppConfig) -> Result<TokenDecoder, StartupError> {
    let tokens = TokenDecoder::new(&TokenConfig {
        jwt_secret: cfg.auth.jwt_secret.clone(),
        verify_signature: cfg.auth.verify_signature,
    })
    .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    if !tokens.is_verifying() {
        warn!("bearer token signatures are not verified (auth.verify_signature = false)");
    }
    Ok(tokens)
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!(service = "server", event = "shutdown_signal", "received Ctrl+C, draining connections");
    }
}

/// Public entry: connect, migrate, build the app and serve until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let tokens = token_decoder(&cfg)?;

    let db = models::db::connect_with_config(&cfg.database).await?;
    if cfg.database.auto_migrate {
        Migrator::up(&db, None).await?;
        info!(service = "server", event = "migrated", "database schema up to date");
    }

    let state = ServerState::from_db(db, tokens);
    let app = routes::build_router(state, &cfg.api, build_cors());

    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, uniform_error_status = cfg.api.uniform_error_status, "starting server");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
