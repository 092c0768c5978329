//! Job read and filter handlers.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use serde_json::Value;

use autosys_core::error::AppError;
use autosys_entity::JobRecord;
use autosys_service::filter::{FieldInfo, FilterGroup};

use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/jobs
pub async fn list_jobs(State(state): State<AppState>) -> Json<Vec<JobRecord>> {
    Json(state.job_service.list().await)
}

/// GET /api/jobs/{job_name}
pub async fn get_job(
    State(state): State<AppState>,
    Path(job_name): Path<String>,
) -> Result<Json<JobRecord>, ApiError> {
    Ok(Json(state.job_service.get(&job_name).await?))
}

/// POST /api/filter
///
/// Body rejections (bad JSON, unknown operator) are reported as 422.
pub async fn filter_jobs(
    State(state): State<AppState>,
    body: Result<Json<FilterGroup>, JsonRejection>,
) -> Result<Json<Vec<JobRecord>>, ApiError> {
    let Json(group) = body.map_err(|e| AppError::validation(e.body_text()))?;
    let jobs = state.job_service.filter(&group).await?;
    tracing::debug!(matched = jobs.len(), "Filtered jobs");
    Ok(Json(jobs))
}

/// GET /api/fields
pub async fn list_fields(State(state): State<AppState>) -> Result<Json<Vec<FieldInfo>>, ApiError> {
    Ok(Json(state.job_service.fields().await?))
}

/// GET /api/fields/{path}/values
pub async fn field_values(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<Json<Vec<Value>>, ApiError> {
    Ok(Json(state.job_service.unique_values(&path).await?))
}
