//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use autosys_api::{AppState, build_app};
use autosys_core::config::AppConfig;
use autosys_entity::JobRecord;
use autosys_store::JobStore;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// The store behind the router
    pub store: Arc<JobStore>,
    /// Application config
    pub config: AppConfig,
    /// Keeps the data directory alive for the test's duration
    _dir: TempDir,
}

impl TestApp {
    /// Create a test application over a fresh, seeded jobs file
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = Self::config_for(&dir);
        let store = Arc::new(JobStore::initialize(&config.storage).await);
        Self::assemble(dir, config, store)
    }

    /// Create a test application over an explicit collection
    pub async fn with_jobs(jobs: Vec<JobRecord>) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config = Self::config_for(&dir);
        let store = Arc::new(JobStore::new(
            &config.storage.jobs_file,
            config.storage.atomic_writes,
            jobs,
        ));
        Self::assemble(dir, config, store)
    }

    fn config_for(dir: &TempDir) -> AppConfig {
        let mut config = AppConfig::default();
        config.storage.jobs_file = dir.path().join("jobs.json").display().to_string();
        config
    }

    fn assemble(dir: TempDir, config: AppConfig, store: Arc<JobStore>) -> Self {
        let state = AppState::new(config.clone(), Arc::clone(&store));
        let router = build_app(state, &config.server.cors);
        Self {
            router,
            store,
            config,
            _dir: dir,
        }
    }

    /// Path of the backing jobs file
    pub fn jobs_file(&self) -> PathBuf {
        PathBuf::from(&self.config.storage.jobs_file)
    }

    /// Send a request through the router
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        self.send(req).await
    }

    /// Send a prebuilt request through the router
    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 16 * 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: http::HeaderMap,
    /// Parsed JSON body (Null if not JSON)
    pub body: Value,
}
