//! Integration tests for weight tracking and progress endpoints

mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn test_log_weight_rejects_non_positive_weight() {
    let app = TestApp::lazy();

    let (status, body) = app
        .post(
            &format!("/api/v1/users/{}/weight", Uuid::new_v4()),
            json!({ "weight_kg": 0 }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["field"], "weight");
}

#[tokio::test]
async fn test_log_weight_rejects_malformed_date() {
    let app = TestApp::lazy();

    let (status, body) = app
        .post(
            &format!("/api/v1/users/{}/weight", Uuid::new_v4()),
            json!({ "weight": 70.2, "recorded_date": "2024/05/01" }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["field"], "recorded_date");
}

#[tokio::test]
async fn test_history_limit_is_validated() {
    let app = TestApp::lazy();

    let (status, body) = app
        .get(&format!("/api/v1/users/{}/weight/history?limit=0", Uuid::new_v4()))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["field"], "limit");
}

#[tokio::test]
async fn test_progress_rejects_unknown_today() {
    let app = TestApp::lazy();

    let (status, body) = app
        .get(&format!("/api/v1/users/{}/progress?today=Someday", Uuid::new_v4()))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["field"], "day");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_same_date_overwrites_entry() {
    let app = TestApp::new().await;
    app.cleanup().await;
    let user_id = app.create_profile("weight_loss").await;
    let path = format!("/api/v1/users/{}/weight", user_id);

    let (status, first) = app
        .post(&path, json!({ "weight_kg": 80.0, "recorded_date": "2024-03-01" }))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let (_, second) = app
        .post(&path, json!({ "weight_kg": 79.5, "recorded_date": "2024-03-01" }))
        .await;
    assert_eq!(first["id"], second["id"]);

    let (status, history) = app.get(&format!("{}/history", path)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(history.as_array().unwrap().len(), 1);
    assert_eq!(history[0]["weight_kg"], 79.5);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_weight_for_unknown_profile_is_not_found() {
    let app = TestApp::new().await;
    app.cleanup().await;

    let (status, _) = app
        .post(
            &format!("/api/v1/users/{}/weight", Uuid::new_v4()),
            json!({ "weight_kg": 70.0 }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_latest_and_delete() {
    let app = TestApp::new().await;
    app.cleanup().await;
    let user_id = app.create_profile("weight_loss").await;
    let path = format!("/api/v1/users/{}/weight", user_id);

    let (status, _) = app.get(&format!("{}/latest", path)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    app.post(&path, json!({ "weight_kg": 81.0, "recorded_date": "2024-03-01" }))
        .await;
    let (_, newest) = app
        .post(&path, json!({ "weight_kg": 80.0, "recorded_date": "2024-03-08" }))
        .await;

    let (status, latest) = app.get(&format!("{}/latest", path)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(latest["id"], newest["id"]);

    let entry_path = format!("{}/{}", path, newest["id"].as_str().unwrap());
    let (status, _) = app.delete(&entry_path).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = app.delete(&entry_path).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_progress_reports_weight_lost() {
    let app = TestApp::new().await;
    app.cleanup().await;
    let user_id = app.create_profile("weight_loss").await;
    let path = format!("/api/v1/users/{}/weight", user_id);

    app.post(&path, json!({ "weight_kg": 70.0, "recorded_date": "2024-01-01" }))
        .await;
    app.post(&path, json!({ "weight_kg": 64.0, "recorded_date": "2024-02-01" }))
        .await;

    let (status, report) = app
        .get(&format!("/api/v1/users/{}/progress?today=Monday", user_id))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["weight"]["weight_lost_kg"], 6.0);
    assert_eq!(report["streak_days"], 0);
    assert_eq!(report["days"].as_array().unwrap().len(), 0);
}
