//! Integration tests for synthetic job generation.

mod helpers;

use std::collections::HashSet;

use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tokio::task::JoinSet;
use tower::ServiceExt;

use autosys_entity::JobRecord;

fn is_hh_mm(value: &str) -> bool {
    let Some((h, m)) = value.split_once(':') else {
        return false;
    };
    h.len() == 2
        && m.len() == 2
        && h.parse::<u32>().is_ok_and(|h| h < 24)
        && m.parse::<u32>().is_ok_and(|m| m < 60)
}

fn is_generated_name(name: &str) -> bool {
    name.strip_prefix("JOB_")
        .is_some_and(|digits| digits.len() == 5 && digits.bytes().all(|b| b.is_ascii_digit()))
}

#[tokio::test]
async fn test_generate_zero_leaves_total_unchanged() {
    let app = helpers::TestApp::new().await;

    let response = app.request("POST", "/api/generate_jobs/0", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Generated 0 jobs");
    assert_eq!(response.body["total_jobs"], 6);
}

#[tokio::test]
async fn test_generate_negative_is_accepted() {
    let app = helpers::TestApp::new().await;

    let response = app.request("POST", "/api/generate_jobs/-3", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Generated -3 jobs");
    assert_eq!(response.body["total_jobs"], 6);
}

#[tokio::test]
async fn test_generate_non_integer_is_rejected() {
    let app = helpers::TestApp::new().await;

    let response = app.request("POST", "/api/generate_jobs/lots", None).await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body["detail"].is_string());
}

#[tokio::test]
async fn test_generate_five_on_empty_collection() {
    let app = helpers::TestApp::with_jobs(Vec::new()).await;

    let response = app.request("POST", "/api/generate_jobs/5", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Generated 5 jobs");
    assert_eq!(response.body["total_jobs"], 5);

    let listed = app.request("GET", "/api/jobs", None).await;
    let jobs: Vec<JobRecord> = serde_json::from_value(listed.body).expect("records");
    assert_eq!(jobs.len(), 5);

    let names: HashSet<&str> = jobs.iter().map(|j| j.job_name.as_str()).collect();
    assert_eq!(names.len(), 5);
    assert!(names.iter().all(|n| is_generated_name(n)));

    for job in &jobs {
        assert!(is_hh_mm(job.start_time.as_deref().expect("start")));
        assert!(is_hh_mm(job.end_time.as_deref().expect("end")));
        let days = job.run_days.as_ref().expect("runDays");
        let distinct: HashSet<&String> = days.iter().collect();
        assert_eq!(distinct.len(), days.len());
        assert!(
            days.iter()
                .all(|d| ["MON", "TUE", "WED", "THU", "FRI", "SAT", "SUN"].contains(&d.as_str()))
        );
    }
}

#[tokio::test]
async fn test_generate_persists_full_collection() {
    let app = helpers::TestApp::new().await;

    app.request("POST", "/api/generate_jobs/3", None).await;

    let raw = tokio::fs::read_to_string(app.jobs_file()).await.expect("read");
    let on_disk: Value = serde_json::from_str(&raw).expect("parse");
    let listed = app.request("GET", "/api/jobs", None).await;
    assert_eq!(on_disk, listed.body);
    assert_eq!(on_disk.as_array().map(Vec::len), Some(9));
    assert!(raw.starts_with("[\n  {"));
}

#[tokio::test]
async fn test_repeated_generation_keeps_names_unique() {
    let app = helpers::TestApp::new().await;

    app.request("POST", "/api/generate_jobs/4", None).await;
    let response = app.request("POST", "/api/generate_jobs/4", None).await;
    assert_eq!(response.body["total_jobs"], 14);

    let jobs = app.store.all().await;
    let names: HashSet<&str> = jobs.iter().map(|j| j.job_name.as_str()).collect();
    assert_eq!(names.len(), 14);
    assert!(names.contains("JOB_00007"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_generation_loses_nothing() {
    let app = helpers::TestApp::new().await;
    let counts = [3_usize, 5, 7, 2, 4];

    let mut tasks = JoinSet::new();
    for count in counts {
        let router = app.router.clone();
        tasks.spawn(async move {
            let req = Request::builder()
                .method("POST")
                .uri(format!("/api/generate_jobs/{count}"))
                .body(Body::empty())
                .expect("request");
            router.oneshot(req).await.expect("response").status()
        });
    }
    while let Some(status) = tasks.join_next().await {
        assert_eq!(status.expect("join"), StatusCode::OK);
    }

    let expected = 6 + counts.iter().sum::<usize>();
    assert_eq!(app.store.len().await, expected);

    let raw = tokio::fs::read_to_string(app.jobs_file()).await.expect("read");
    let on_disk: Vec<JobRecord> = serde_json::from_str(&raw).expect("parse");
    assert_eq!(on_disk.len(), expected);
    let names: HashSet<&str> = on_disk.iter().map(|j| j.job_name.as_str()).collect();
    assert_eq!(names.len(), expected);
}
