//! Synthetic job generation handler.

use axum::Json;
use axum::extract::{Path, State};

use crate::dto::response::GenerateResponse;
use crate::error::ApiError;
use crate::extractors::path::parse_count;
use crate::state::AppState;

/// POST /api/generate_jobs/{count}
///
/// A zero or negative count appends nothing and still succeeds.
pub async fn generate_jobs(
    State(state): State<AppState>,
    Path(count): Path<String>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let count = parse_count(&count)?;
    let summary = state.job_service.generate(count).await?;

    Ok(Json(GenerateResponse {
        message: format!("Generated {} jobs", summary.requested),
        total_jobs: summary.total,
    }))
}
