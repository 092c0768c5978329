//! In-memory job collection backed by a JSON file.

use std::path::{Path, PathBuf};

use tokio::sync::RwLock;

use autosys_core::config::storage::StorageConfig;
use autosys_core::error::AppError;
use autosys_core::result::AppResult;
use autosys_entity::JobRecord;

use crate::persistence::{self, LoadOutcome};

/// The process-wide job collection.
///
/// Reads share a read lock. Every mutation holds the write lock across both
/// the in-memory append and the full-file rewrite, so concurrent appends
/// are serialized and none are lost.
#[derive(Debug)]
pub struct JobStore {
    path: PathBuf,
    atomic_writes: bool,
    jobs: RwLock<Vec<JobRecord>>,
}

impl JobStore {
    /// Creates a store over an already-loaded collection.
    pub fn new(path: impl Into<PathBuf>, atomic_writes: bool, jobs: Vec<JobRecord>) -> Self {
        Self {
            path: path.into(),
            atomic_writes,
            jobs: RwLock::new(jobs),
        }
    }

    /// Loads (or seeds) the jobs file named by `config` and wraps the result.
    pub async fn initialize(config: &StorageConfig) -> Self {
        let path = PathBuf::from(&config.jobs_file);
        let (jobs, outcome) = persistence::load_or_seed(&path).await;

        match outcome {
            LoadOutcome::Loaded => {
                tracing::info!(path = %path.display(), jobs = jobs.len(), "Loaded jobs file")
            }
            LoadOutcome::Seeded => {
                tracing::info!(path = %path.display(), jobs = jobs.len(), "Seeded new jobs file")
            }
            LoadOutcome::FellBackToSeed => {
                tracing::info!(jobs = jobs.len(), "Using in-memory seed collection")
            }
        }

        Self::new(path, config.atomic_writes, jobs)
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All records in insertion order.
    pub async fn all(&self) -> Vec<JobRecord> {
        self.jobs.read().await.clone()
    }

    /// Number of records held.
    pub async fn len(&self) -> usize {
        self.jobs.read().await.len()
    }

    /// First record whose name equals `name`.
    pub async fn find_by_name(&self, name: &str) -> AppResult<JobRecord> {
        self.jobs
            .read()
            .await
            .iter()
            .find(|job| job.job_name == name)
            .cloned()
            .ok_or_else(|| AppError::not_found("Job not found"))
    }

    /// Appends `records` and rewrites the whole file. Returns the new total.
    pub async fn append_and_persist(&self, records: Vec<JobRecord>) -> AppResult<usize> {
        self.append_with(|_| records).await
    }

    /// Builds records from the current collection and appends them, all
    /// under one write lock, then rewrites the whole file.
    ///
    /// The appended records stay in memory even if the write fails.
    pub async fn append_with<F>(&self, build: F) -> AppResult<usize>
    where
        F: FnOnce(&[JobRecord]) -> Vec<JobRecord>,
    {
        let mut jobs = self.jobs.write().await;
        let new_records = build(jobs.as_slice());
        let added = new_records.len();
        jobs.extend(new_records);

        persistence::write_collection(&self.path, jobs.as_slice(), self.atomic_writes).await?;

        tracing::info!(
            path = %self.path.display(),
            added,
            total = jobs.len(),
            "Persisted jobs file"
        );
        Ok(jobs.len())
    }
}
