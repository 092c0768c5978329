//! Access log for the jobs API.

use axum::extract::{MatchedPath, Request};
use axum::middleware::Next;
use axum::response::Response;
use std::time::Instant;
use tracing::info;

/// Route label for requests that matched no route (404 fallback).
const UNMATCHED_ROUTE: &str = "unmatched";

/// The route template a request was dispatched to, e.g. `/api/jobs/{job_name}`.
///
/// Logged next to the concrete path so generated job names don't fan out
/// into one log key per name.
pub fn route_label(request: &Request) -> String {
    request
        .extensions()
        .get::<MatchedPath>()
        .map(|matched| matched.as_str().to_owned())
        .unwrap_or_else(|| UNMATCHED_ROUTE.to_owned())
}

/// Logs method, route template, concrete path, status, and duration.
pub async fn request_logging(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let route = route_label(&request);
    let start = Instant::now();

    let response = next.run(request).await;

    info!(
        method = %method,
        route = %route,
        path = %path,
        status = response.status().as_u16(),
        duration_ms = start.elapsed().as_millis() as u64,
        "Handled jobs API request"
    );

    response
}
