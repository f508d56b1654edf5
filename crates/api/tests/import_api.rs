//! HTTP-level tests for the file import pipeline.
//!
//! The processor is injected, so both outcomes of the `processing` state are
//! exercised deterministically; only the happy path with the simulated
//! processor actually waits on its (short, test-configured) delay.

mod common;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::http::StatusCode;
use common::{body_json, build_test_app, build_test_app_with_processor, get, post_multipart};
use pmis_api::background::import::ImportProcessor;
use pmis_store::models::imported_file::ImportedFile;
use pmis_store::MemStore;

struct FailingProcessor;

#[async_trait]
impl ImportProcessor for FailingProcessor {
    async fn process(&self, _file: &ImportedFile) -> Result<serde_json::Value, String> {
        Err("unreadable file".to_string())
    }
}

/// Poll the record until it leaves `processing` or the deadline passes.
async fn wait_for_terminal_status(
    app: &axum::Router,
    id: i64,
) -> serde_json::Value {
    for _ in 0..50 {
        tokio::time::sleep(Duration::from_millis(20)).await;
        let json = body_json(get(app.clone(), &format!("/api/import/{id}")).await).await;
        if json["status"] != "processing" {
            return json;
        }
    }
    panic!("import {id} never left the processing state");
}

#[tokio::test]
async fn accepted_upload_processes_to_completed() {
    let store = Arc::new(MemStore::new());
    let app = build_test_app(Arc::clone(&store));

    let response = post_multipart(
        app.clone(),
        "/api/import",
        "file",
        "vendors.csv",
        "text/csv",
        b"vendor,amount\nacme,100\n",
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["status"], "processing");
    assert_eq!(json["fileName"], "vendors.csv");
    assert_eq!(json["fileType"], "text/csv");
    assert_eq!(json["uploadedBy"], 1);
    let id = json["id"].as_i64().unwrap();

    let done = wait_for_terminal_status(&app, id).await;
    assert_eq!(done["status"], "completed");
    let records = done["processedData"]["records"].as_u64().unwrap();
    assert!((1..=100).contains(&records));
    assert_eq!(done["errorMessage"], serde_json::Value::Null);
}

#[tokio::test]
async fn failing_processor_marks_record_failed() {
    let store = Arc::new(MemStore::new());
    let app = build_test_app_with_processor(Arc::clone(&store), Arc::new(FailingProcessor));

    let response = post_multipart(
        app.clone(),
        "/api/import",
        "file",
        "broken.pdf",
        "application/pdf",
        b"%PDF-garbage",
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["id"].as_i64().unwrap();

    let done = wait_for_terminal_status(&app, id).await;
    assert_eq!(done["status"], "failed");
    assert_eq!(done["errorMessage"], "unreadable file");
    assert_eq!(done["processedData"], serde_json::Value::Null);
}

#[tokio::test]
async fn disallowed_content_type_is_rejected_with_reason() {
    let store = Arc::new(MemStore::new());
    let app = build_test_app(Arc::clone(&store));

    let response = post_multipart(
        app.clone(),
        "/api/import",
        "file",
        "malware.exe",
        "application/octet-stream",
        b"MZ",
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    let message = json["error"].as_str().unwrap();
    assert!(message.contains("application/octet-stream"));

    // Nothing was stored.
    let listing = body_json(get(app, "/api/import").await).await;
    assert_eq!(listing.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn upload_without_file_field_returns_400() {
    let app = build_test_app(Arc::new(MemStore::new()));
    let response = post_multipart(
        app,
        "/api/import",
        "attachment",
        "vendors.csv",
        "text/csv",
        b"a,b\n",
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["error"], "No file uploaded");
}

#[tokio::test]
async fn listing_and_get_by_id() {
    let store = Arc::new(MemStore::new());
    let app = build_test_app(Arc::clone(&store));

    let response = post_multipart(
        app.clone(),
        "/api/import",
        "file",
        "a.csv",
        "text/csv",
        b"x\n",
    )
    .await;
    let id = body_json(response).await["id"].as_i64().unwrap();

    let listing = body_json(get(app.clone(), "/api/import").await).await;
    assert_eq!(listing.as_array().unwrap().len(), 1);

    let response = get(app.clone(), &format!("/api/import/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(app, "/api/import/999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
