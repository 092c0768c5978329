//! # autosys-service
//!
//! Business logic over the job store: synthetic job generation, nested
//! boolean filtering, and field discovery.

pub mod filter;
pub mod generator;
pub mod jobs;

pub use jobs::{GenerateSummary, JobService};
