//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use autosys_core::config::AppConfig;
use autosys_service::JobService;
use autosys_store::JobStore;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Job query and generation service
    pub job_service: Arc<JobService>,
}

impl AppState {
    /// Wires the service layer over `store`.
    pub fn new(config: AppConfig, store: Arc<JobStore>) -> Self {
        Self {
            config: Arc::new(config),
            job_service: Arc::new(JobService::new(store)),
        }
    }
}
