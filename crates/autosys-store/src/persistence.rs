//! Reading and writing the persisted jobs file.
//!
//! The file holds the whole collection as a pretty-printed JSON array. Every
//! save overwrites the entire file.

use std::path::{Path, PathBuf};

use autosys_core::error::{AppError, ErrorKind};
use autosys_core::result::AppResult;
use autosys_entity::{JobRecord, seed_jobs};

/// How a collection was obtained at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file existed and parsed.
    Loaded,
    /// The file was missing, so the seed was written and read back.
    Seeded,
    /// The file could not be read or parsed; the in-memory seed is used.
    FellBackToSeed,
}

/// Loads the collection at `path`, seeding the file first if it is absent.
///
/// Never fails: an unreadable or malformed file yields the seed collection
/// without rewriting the file.
pub async fn load_or_seed(path: &Path) -> (Vec<JobRecord>, LoadOutcome) {
    let mut seeded = false;

    if !tokio::fs::try_exists(path).await.unwrap_or(false) {
        match write_collection(path, &seed_jobs(), false).await {
            Ok(()) => seeded = true,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to write seed jobs file");
            }
        }
    }

    match read_collection(path).await {
        Ok(jobs) if seeded => (jobs, LoadOutcome::Seeded),
        Ok(jobs) => (jobs, LoadOutcome::Loaded),
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Jobs file unreadable, serving seed collection"
            );
            (seed_jobs(), LoadOutcome::FellBackToSeed)
        }
    }
}

/// Reads and parses the collection at `path`.
pub async fn read_collection(path: &Path) -> AppResult<Vec<JobRecord>> {
    let bytes = tokio::fs::read(path).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Storage,
            format!("Failed to read '{}'", path.display()),
            e,
        )
    })?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Serializes `jobs` with 2-space indentation and overwrites `path`.
///
/// With `atomic` set the bytes go to a sibling temp file that is then
/// renamed over `path`.
pub async fn write_collection(path: &Path, jobs: &[JobRecord], atomic: bool) -> AppResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create dir '{}'", parent.display()),
                e,
            )
        })?;
    }

    let bytes = serde_json::to_vec_pretty(jobs)?;

    if atomic {
        let tmp = temp_path(path);
        tokio::fs::write(&tmp, &bytes).await?;
        tokio::fs::rename(&tmp, path).await?;
    } else {
        tokio::fs::write(path, &bytes).await?;
    }

    tracing::debug!(path = %path.display(), records = jobs.len(), "Wrote jobs file");
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
