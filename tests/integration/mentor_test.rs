//! Integration tests for the mentor registry.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_create_list_update_delete() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/mentors",
            Some(json!({
                "name": "Zainab",
                "subject": "Science",
                "school": "Al Noor School",
                "emirate": "Sharjah"
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    let id = response.body["id"].as_str().unwrap().to_string();
    assert!(id.starts_with("M-"));

    app.request("POST", "/api/mentors", Some(json!({ "name": "Ahmed" })))
        .await;

    // Alphabetical by name.
    let response = app.request("GET", "/api/mentors", None).await;
    let list = response.body.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["name"], "Ahmed");
    assert_eq!(list[1]["name"], "Zainab");

    let response = app
        .request(
            "PUT",
            &format!("/api/mentors/{id}"),
            Some(json!({ "school": null, "email": "zainab@example.com" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["school"], json!(null));
    assert_eq!(response.body["email"], "zainab@example.com");
    assert_eq!(response.body["subject"], "Science");

    let response = app.request("DELETE", &format!("/api/mentors/{id}"), None).await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("DELETE", &format!("/api/mentors/{id}"), None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_without_name_rejected() {
    let app = TestApp::new().await;

    let response = app
        .request("POST", "/api/mentors", Some(json!({ "name": "" })))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
