pub mod home;
pub mod isme;

use axum::{routing::get, Json, Router};
use tower_http::{
    cors::CorsLayer,
    services::ServeDir,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;
use service::isme::MembershipService;

use crate::openapi::ApiDoc;

/// Shared handler state. Cloned per request; the store sits behind an `Arc`.
#[derive(Clone)]
pub struct ServerState {
    pub membership: MembershipService,
}

impl ServerState {
    pub fn new(membership: MembershipService) -> Self {
        Self { membership }
    }
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: page, REST routes, docs and static assets.
pub fn build_router(state: ServerState, cors: CorsLayer, public_dir: &str) -> Router {
    let static_files = ServeDir::new(public_dir);

    Router::new()
        // View controllers
        .route("/", get(home::home_page))
        // Rest controllers
        .route("/rest/isme", get(isme::all_of_me))
        .route(
            "/rest/isme/:name",
            get(isme::that_is_me).put(isme::is_me).delete(isme::is_not_me),
        )
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .fallback_service(static_files)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                // 5xx responses are logged at ERROR
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
