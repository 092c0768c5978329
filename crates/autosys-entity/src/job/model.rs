//! Job record model.

use serde::{Deserialize, Serialize};

/// A scheduled-job description.
///
/// The record is inert data: `status` and the time fields describe a job
/// but nothing here executes it. `job_type` and `status` are open text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
    /// Job name, expected unique within the collection.
    pub job_name: String,
    /// Job type (e.g. `CMD`, `BOX`).
    pub job_type: String,
    /// Last known status (e.g. `SUCCESS`, `RUNNING`).
    pub status: String,
    /// Priority.
    pub priority: i64,
    /// Owning user.
    pub owner: String,
    /// Shell command line.
    pub command: String,
    /// Machine the job runs on.
    pub machine: String,
    /// Start time, `HH:MM`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    /// End time, `HH:MM`. May be earlier than `start_time` when the run
    /// crosses midnight.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    /// Weekday tokens the job runs on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_days: Option<Vec<String>>,
    /// Names of jobs this job depends on. Not checked for existence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependencies: Option<Vec<String>>,
    /// Free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Formats a minute-of-day value (`0..1440`) as `HH:MM`.
pub fn format_minute_of_day(minutes: u32) -> String {
    let minutes = minutes % 1440;
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
