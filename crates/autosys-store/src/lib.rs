//! # autosys-store
//!
//! Owns the in-memory job collection for the process lifetime and mediates
//! every read and write of the persisted JSON file.

pub mod persistence;
pub mod repository;

pub use repository::JobStore;
