//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Body of `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Body of `POST /api/generate_jobs/{count}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// `Generated {count} jobs`, echoing the requested count.
    pub message: String,
    /// Collection size after generation.
    pub total_jobs: usize,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Application version.
    pub version: String,
    /// Records currently held.
    pub total_jobs: usize,
}
