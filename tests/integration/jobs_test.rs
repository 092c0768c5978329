//! Integration tests for job listing and lookup.

mod helpers;

use http::{Request, StatusCode};
use serde_json::json;

use autosys_entity::seed_jobs;

#[tokio::test]
async fn test_welcome_message() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "message": "Welcome to Autosys Jobs API" }));
}

#[tokio::test]
async fn test_list_jobs_returns_seed_in_order() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/jobs", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, serde_json::to_value(seed_jobs()).expect("serialize"));
}

#[tokio::test]
async fn test_fresh_start_writes_seed_file() {
    let app = helpers::TestApp::new().await;

    let raw = tokio::fs::read_to_string(app.jobs_file()).await.expect("seed file");
    let on_disk: Vec<autosys_entity::JobRecord> = serde_json::from_str(&raw).expect("parse");

    assert_eq!(on_disk, seed_jobs());
}

#[tokio::test]
async fn test_get_every_present_job() {
    let app = helpers::TestApp::new().await;

    for job in seed_jobs() {
        let response = app
            .request("GET", &format!("/api/jobs/{}", job.job_name), None)
            .await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body["jobName"], job.job_name.as_str());
    }
}

#[tokio::test]
async fn test_get_job_not_found() {
    let app = helpers::TestApp::new().await;

    for name in ["NOPE", "daily_backup", "JOB_00000"] {
        let response = app.request("GET", &format!("/api/jobs/{name}"), None).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.body, json!({ "detail": "Job not found" }));
    }
}

#[tokio::test]
async fn test_get_job_with_encoded_name() {
    let mut job = seed_jobs().remove(0);
    job.job_name = "NIGHTLY BATCH".to_string();
    let app = helpers::TestApp::with_jobs(vec![job]).await;

    let response = app.request("GET", "/api/jobs/NIGHTLY%20BATCH", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["jobName"], "NIGHTLY BATCH");
}

#[tokio::test]
async fn test_health_reports_total() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["total_jobs"], 6);
    let keys: Vec<&String> = response.body.as_object().expect("object").keys().collect();
    assert_eq!(keys, vec!["status", "version", "total_jobs"]);
}

#[tokio::test]
async fn test_cors_preflight_allows_any_origin_with_credentials() {
    let app = helpers::TestApp::new().await;

    let req = Request::builder()
        .method("OPTIONS")
        .uri("/api/jobs")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "x-custom")
        .body(axum::body::Body::empty())
        .expect("request");
    let response = app.send(req).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.headers["access-control-allow-origin"],
        "http://localhost:5173"
    );
    assert_eq!(response.headers["access-control-allow-credentials"], "true");
}

#[tokio::test]
async fn test_filter_and_fields_are_ordinary_job_names() {
    let app = helpers::TestApp::new().await;

    for name in ["filter", "fields"] {
        let response = app.request("GET", &format!("/api/jobs/{name}"), None).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.body, json!({ "detail": "Job not found" }));
    }

    let jobs = ["filter", "fields"]
        .into_iter()
        .map(|name| {
            let mut job = seed_jobs().remove(0);
            job.job_name = name.to_string();
            job
        })
        .collect();
    let app = helpers::TestApp::with_jobs(jobs).await;

    for name in ["filter", "fields"] {
        let response = app.request("GET", &format!("/api/jobs/{name}"), None).await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body["jobName"], name);
    }
}
