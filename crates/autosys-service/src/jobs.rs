//! Job query and generation service.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use autosys_core::result::AppResult;
use autosys_entity::JobRecord;
use autosys_store::JobStore;

use crate::filter::{self, FieldInfo, FilterGroup};
use crate::generator::generate_jobs;

/// Outcome of a generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateSummary {
    /// The count the caller asked for, echoed as given.
    pub requested: i64,
    /// Records actually appended.
    pub generated: usize,
    /// Collection size after the append.
    pub total: usize,
}

/// Reads, filters, and grows the job collection.
#[derive(Debug, Clone)]
pub struct JobService {
    store: Arc<JobStore>,
}

impl JobService {
    /// Creates a new job service.
    pub fn new(store: Arc<JobStore>) -> Self {
        Self { store }
    }

    /// Every record, insertion order.
    pub async fn list(&self) -> Vec<JobRecord> {
        self.store.all().await
    }

    /// The first record named `name`.
    pub async fn get(&self, name: &str) -> AppResult<JobRecord> {
        self.store.find_by_name(name).await
    }

    /// Collection size.
    pub async fn count(&self) -> usize {
        self.store.len().await
    }

    /// Generates `count` synthetic records and persists the collection.
    ///
    /// Generation runs under the store's write lock, so names are unique
    /// against the live collection even with concurrent callers.
    pub async fn generate(&self, count: i64) -> AppResult<GenerateSummary> {
        let mut generated = 0;
        let total = self
            .store
            .append_with(|existing| {
                let jobs = generate_jobs(existing, count, &mut rand::thread_rng());
                generated = jobs.len();
                jobs
            })
            .await?;

        tracing::info!(requested = count, generated, total, "Generated synthetic jobs");

        Ok(GenerateSummary {
            requested: count,
            generated,
            total,
        })
    }

    /// Records matching `group`, insertion order.
    pub async fn filter(&self, group: &FilterGroup) -> AppResult<Vec<JobRecord>> {
        let mut matched = Vec::new();
        for job in self.store.all().await {
            if filter::matches(&serde_json::to_value(&job)?, group) {
                matched.push(job);
            }
        }
        Ok(matched)
    }

    /// Field descriptors derived from the first record.
    pub async fn fields(&self) -> AppResult<Vec<FieldInfo>> {
        Ok(filter::extract_fields(&self.as_values().await?))
    }

    /// Distinct values at `path` across the collection.
    pub async fn unique_values(&self, path: &str) -> AppResult<Vec<Value>> {
        Ok(filter::unique_values(&self.as_values().await?, path))
    }

    async fn as_values(&self) -> AppResult<Vec<Value>> {
        self.store
            .all()
            .await
            .iter()
            .map(|job| serde_json::to_value(job).map_err(Into::into))
            .collect()
    }
}
