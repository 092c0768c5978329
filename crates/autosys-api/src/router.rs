//! Route definitions for the jobs HTTP API.
//!
//! The welcome route sits at `/`; everything else is mounted under `/api`.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the router with all routes and the request logging middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(job_routes())
        .merge(filter_routes())
        .merge(generate_routes())
        .merge(health_routes());

    Router::new()
        .route("/", get(handlers::root::welcome))
        .nest("/api", api_routes)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Job reads. Nothing else lives under `/jobs/` so every name reaches
/// `get_job`.
fn job_routes() -> Router<AppState> {
    Router::new()
        .route("/jobs", get(handlers::jobs::list_jobs))
        .route("/jobs/{job_name}", get(handlers::jobs::get_job))
}

fn filter_routes() -> Router<AppState> {
    Router::new()
        .route("/filter", post(handlers::jobs::filter_jobs))
        .route("/fields", get(handlers::jobs::list_fields))
        .route("/fields/{path}/values", get(handlers::jobs::field_values))
}

fn generate_routes() -> Router<AppState> {
    Router::new().route(
        "/generate_jobs/{count}",
        post(handlers::generate::generate_jobs),
    )
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
