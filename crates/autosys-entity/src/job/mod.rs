//! Scheduled-job record entities.

pub mod model;
pub mod seed;
pub mod vocabulary;

pub use model::{JobRecord, format_minute_of_day};
pub use seed::seed_jobs;
