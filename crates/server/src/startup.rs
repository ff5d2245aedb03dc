use std::{net::SocketAddr, sync::Arc};

use axum::Router;
use configs::AppConfig;
use service::auth::{AdminAuth, AuthConfig};
use service::content::{ContentService, ContentStore};
use service::storage::UuidIds;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes::{self, auth::ServerState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Assemble the router state from configuration: the content collections
/// (seeded or empty) and the admin authenticator.
pub async fn build_state(cfg: &AppConfig) -> anyhow::Result<ServerState> {
    let ids = Arc::new(UuidIds);
    let store = if cfg.content.seed {
        ContentStore::seeded(ids).await
    } else {
        ContentStore::empty(ids)
    };
    let auth = AdminAuth::new(AuthConfig {
        admin_password: cfg.auth.admin_password.clone(),
        jwt_secret: cfg.auth.jwt_secret.clone(),
        token_ttl_secs: cfg.auth.token_ttl_secs,
    })?;
    Ok(ServerState { content: ContentService::new(Arc::new(store)), auth: Arc::new(auth) })
}

pub fn app(state: ServerState) -> Router {
    routes::build_router(state, build_cors())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, shutting down");
}

/// Public entry: build the app and serve HTTP until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let state = build_state(&cfg).await?;
    let app = app(state);

    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, seeded = cfg.content.seed, "storefront listening");
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    Ok(())
}
