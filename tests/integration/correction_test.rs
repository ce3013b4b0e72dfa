//! Integration tests for the correction workflow.

use http::StatusCode;
use serde_json::{Value, json};

use crate::helpers::TestApp;

async fn raise_correction(app: &TestApp, candidate_id: &str) -> Value {
    let response = app
        .request(
            "POST",
            &format!("/api/candidates/{candidate_id}/corrections"),
            Some(json!({
                "text": "GPA does not match the transcript",
                "fromUser": "teacher@example.com",
                "fromRole": "Teacher",
                "targetRole": "Manager"
            })),
        )
        .await;
    assert_eq!(
        response.status,
        StatusCode::CREATED,
        "Correction creation failed: {:?}",
        response.body
    );
    response.body
}

#[tokio::test]
async fn test_create_starts_pending_and_notifies_target_role() {
    let app = TestApp::new().await;
    let candidate_id = app.create_candidate(json!({ "name": "Aisha" })).await;

    let correction = raise_correction(&app, &candidate_id).await;
    assert_eq!(correction["status"], "Pending");
    assert_eq!(correction["candidateId"], json!(candidate_id));

    let response = app
        .request("GET", "/api/notifications?role=Manager", None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let notifications = response.body.as_array().unwrap();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0]["type"], "correction");
    assert_eq!(
        notifications[0]["target"]["candidateId"],
        json!(candidate_id)
    );
}

#[tokio::test]
async fn test_create_for_unknown_candidate_404() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/candidates/C-missing/corrections",
            Some(json!({
                "text": "x",
                "fromUser": "t@example.com",
                "fromRole": "Teacher",
                "targetRole": "Manager"
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_reject_requires_reason() {
    let app = TestApp::new().await;
    let candidate_id = app.create_candidate(json!({ "name": "Amal" })).await;
    let correction = raise_correction(&app, &candidate_id).await;
    let id = correction["id"].as_str().unwrap();

    let response = app
        .request("PUT", &format!("/api/corrections/{id}/reject"), Some(json!({})))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request(
            "PUT",
            &format!("/api/corrections/{id}/reject"),
            Some(json!({ "reason": "Transcript already verified" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "Rejected");
    assert_eq!(response.body["rejectReason"], "Transcript already verified");
}

#[tokio::test]
async fn test_terminal_state_is_closed() {
    let app = TestApp::new().await;
    let candidate_id = app.create_candidate(json!({ "name": "Moza" })).await;
    let correction = raise_correction(&app, &candidate_id).await;
    let id = correction["id"].as_str().unwrap();

    let response = app
        .request("PUT", &format!("/api/corrections/{id}/resolve"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "Resolved");

    // Resolved is terminal; no further transitions.
    let response = app
        .request("PUT", &format!("/api/corrections/{id}/resolve"), None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request(
            "PUT",
            &format!("/api/corrections/{id}/respond"),
            Some(json!({
                "author": "manager@example.com",
                "role": "Manager",
                "text": "Too late"
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_respond_keeps_correction_open() {
    let app = TestApp::new().await;
    let candidate_id = app.create_candidate(json!({ "name": "Shamma" })).await;
    let correction = raise_correction(&app, &candidate_id).await;
    let id = correction["id"].as_str().unwrap();

    let response = app
        .request(
            "PUT",
            &format!("/api/corrections/{id}/respond"),
            Some(json!({
                "author": "manager@example.com",
                "role": "Manager",
                "text": "Looking into it"
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "Responded");
    assert_eq!(response.body["response"]["text"], "Looking into it");

    // A responded correction can still be resolved.
    let response = app
        .request("PUT", &format!("/api/corrections/{id}/resolve"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "Resolved");
}

#[tokio::test]
async fn test_listings() {
    let app = TestApp::new().await;
    let first = app.create_candidate(json!({ "name": "A" })).await;
    let second = app.create_candidate(json!({ "name": "B" })).await;
    raise_correction(&app, &first).await;
    raise_correction(&app, &second).await;

    let response = app.request("GET", "/api/corrections", None).await;
    assert_eq!(response.body.as_array().unwrap().len(), 2);

    let response = app
        .request("GET", &format!("/api/candidates/{first}/corrections"), None)
        .await;
    let list = response.body.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["candidateId"], json!(first));
}
