pub mod admin;
pub mod auth;
pub mod content;

use axum::{
    middleware,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use common::types::Health;
use models::{ContactMessage, Formation, GalleryPhoto, ImpactStory, Product, Validate};
use serde::{de::DeserializeOwned, Serialize};
use service::content::Collection;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use crate::openapi::ApiDoc;
use auth::ServerState;

#[utoipa::path(get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn metrics() -> impl IntoResponse {
    common::metrics::encode_metrics()
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// `POST /admin/{kind}` plus `PUT`/`DELETE /admin/{kind}/:id` for one kind.
fn crud_routes<E>(path: &str) -> Router<ServerState>
where
    E: Collection + Serialize,
    E::Input: DeserializeOwned + Validate + 'static,
{
    Router::new()
        .route(path, post(admin::create::<E>))
        .route(&format!("{path}/:id"), get(content::get_one::<E>).put(admin::replace::<E>).delete(admin::remove::<E>))
}

/// Build the full application router: public reads, the contact form,
/// login, and the bearer-protected admin surface.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .route("/api-docs/openapi.json", get(openapi_json))
        .route("/product", get(content::list_by_category::<Product>))
        .route("/product/:id", get(content::get_one::<Product>))
        .route("/formation", get(content::list::<Formation>))
        .route("/formation/:id", get(content::get_one::<Formation>))
        .route("/impact", get(content::list::<ImpactStory>))
        .route("/impact/:id", get(content::get_one::<ImpactStory>))
        .route("/gallery", get(content::list_by_category::<GalleryPhoto>))
        .route("/contact", post(content::submit_contact))
        .route("/auth/login", post(auth::login));

    let admin_routes = Router::new()
        .merge(crud_routes::<Product>("/admin/product"))
        .merge(crud_routes::<Formation>("/admin/formation"))
        .merge(crud_routes::<ImpactStory>("/admin/impact"))
        .merge(crud_routes::<GalleryPhoto>("/admin/gallery"))
        .route("/admin/contact", get(content::list::<ContactMessage>))
        .route("/admin/contact/:id", get(content::get_one::<ContactMessage>))
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::require_bearer_token));

    public
        .merge(admin_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
