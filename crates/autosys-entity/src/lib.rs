//! # autosys-entity
//!
//! Domain entity models for the Autosys jobs service.

pub mod job;

pub use job::{JobRecord, seed_jobs};
