//! Route definitions for the orgchart HTTP API.
//!
//! Every route is mounted under the configured API prefix (`/api/v1` by default).

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::handlers;
use crate::api::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(health_routes())
        .merge(team_routes())
        .merge(employee_routes());

    let mut router = Router::new()
        .nest(&state.config.server.api_prefix, api_routes)
        .layer(TraceLayer::new_for_http());

    if state.config.server.cors_permissive {
        router = router.layer(CorsLayer::permissive());
    }

    router.with_state(state)
}

/// Liveness probe
fn health_routes() -> Router<AppState> {
    Router::new().route("/healthz", get(handlers::health::healthz))
}

/// Team create and list
fn team_routes() -> Router<AppState> {
    Router::new().route("/teams", get(handlers::team::list).post(handlers::team::create))
}

/// Employee CRUD and hierarchy
fn employee_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/employees",
            get(handlers::employee::list).post(handlers::employee::create),
        )
        .route(
            "/employees/{id}",
            get(handlers::employee::get)
                .put(handlers::employee::update)
                .delete(handlers::employee::delete),
        )
        .route("/employees/{id}/tree", get(handlers::employee::tree))
}
