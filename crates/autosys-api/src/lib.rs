//! # autosys-api
//!
//! HTTP API layer built on Axum.
//!
//! Provides the job listing, lookup, filtering, and generation endpoints,
//! plus CORS and request logging middleware and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
