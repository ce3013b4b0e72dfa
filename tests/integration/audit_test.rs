//! Integration tests for the audit log.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_append_and_filter() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/audit",
            Some(json!({
                "eventType": "report.generated",
                "payload": { "by": "admin@example.com" }
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);

    app.request(
        "POST",
        "/api/audit",
        Some(json!({ "eventType": "login.failed" })),
    )
    .await;

    let response = app.request("GET", "/api/audit", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_array().unwrap().len(), 2);

    let response = app
        .request("GET", "/api/audit?eventType=report.generated", None)
        .await;
    let list = response.body.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["payload"]["by"], "admin@example.com");
}

#[tokio::test]
async fn test_candidate_import_and_delete_are_audited() {
    let app = TestApp::new().await;
    let id = app.create_candidate(json!({ "name": "Salem" })).await;
    app.request("DELETE", &format!("/api/candidates/{id}"), None)
        .await;

    let response = app
        .request("GET", "/api/audit?eventType=candidate.imported", None)
        .await;
    assert_eq!(response.body.as_array().unwrap().len(), 1);

    let response = app
        .request("GET", "/api/audit?eventType=candidate.deleted", None)
        .await;
    assert_eq!(response.body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_append_requires_event_type() {
    let app = TestApp::new().await;

    let response = app
        .request("POST", "/api/audit", Some(json!({ "eventType": "" })))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
