//! Route handlers organized by domain.

pub mod generate;
pub mod health;
pub mod jobs;
pub mod root;
