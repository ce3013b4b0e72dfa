//! Integration tests for the notification log.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_requires_an_addressee() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/notifications",
            Some(json!({ "type": "info", "title": "No one to tell" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_list_and_mark_read() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/notifications",
            Some(json!({
                "email": "anna@example.com",
                "type": "statusChange",
                "title": "You are eligible",
                "body": "Your status moved to Eligible",
                "target": { "candidateId": "C-1" }
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    let id = response.body["id"].as_str().unwrap().to_string();
    assert_eq!(response.body["read"], false);

    // Email filter is case-insensitive.
    let response = app
        .request("GET", "/api/notifications?email=ANNA@example.com", None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let list = response.body.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["title"], "You are eligible");

    let response = app
        .request("GET", "/api/notifications?email=other@example.com", None)
        .await;
    assert!(response.body.as_array().unwrap().is_empty());

    let response = app
        .request("PUT", &format!("/api/notifications/{id}/read"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["read"], true);
}

#[tokio::test]
async fn test_role_addressed_notification() {
    let app = TestApp::new().await;

    app.request(
        "POST",
        "/api/notifications",
        Some(json!({
            "role": "Trainer",
            "type": "info",
            "title": "New cohort assigned"
        })),
    )
    .await;

    let response = app
        .request("GET", "/api/notifications?role=Trainer", None)
        .await;
    assert_eq!(response.body.as_array().unwrap().len(), 1);

    let response = app
        .request("GET", "/api/notifications?role=Auditor", None)
        .await;
    assert!(response.body.as_array().unwrap().is_empty());
}
