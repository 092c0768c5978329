//! Persisted jobs file configuration.

use serde::{Deserialize, Serialize};

/// Where and how the job collection is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path of the JSON file holding the job collection.
    #[serde(default = "default_jobs_file")]
    pub jobs_file: String,
    /// Write to a sibling temp file and rename over the target on save.
    #[serde(default = "default_atomic_writes")]
    pub atomic_writes: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            jobs_file: default_jobs_file(),
            atomic_writes: default_atomic_writes(),
        }
    }
}

fn default_jobs_file() -> String {
    "api/data/jobs.json".to_string()
}

fn default_atomic_writes() -> bool {
    true
}
