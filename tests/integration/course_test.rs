//! Integration tests for the course catalogue.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_create_applies_defaults() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/courses",
            Some(json!({ "code": "PED-101", "title": "Pedagogy Basics" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let body = &response.body;
    assert!(body["id"].as_str().unwrap().starts_with("CR-"));
    assert_eq!(body["weight"], 1.0);
    assert_eq!(body["passThreshold"], 70.0);
    assert_eq!(body["isRequired"], false);
    assert_eq!(body["active"], true);
    assert_eq!(body["trackIds"], json!([]));
}

#[tokio::test]
async fn test_duplicate_code_conflict() {
    let app = TestApp::new().await;
    app.request(
        "POST",
        "/api/courses",
        Some(json!({ "code": "PED-101", "title": "Pedagogy Basics" })),
    )
    .await;

    let response = app
        .request(
            "POST",
            "/api/courses",
            Some(json!({ "code": "PED-101", "title": "Another Title" })),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_update_tracks_and_threshold() {
    let app = TestApp::new().await;
    let response = app
        .request(
            "POST",
            "/api/courses",
            Some(json!({ "code": "ICT-201", "title": "Classroom ICT" })),
        )
        .await;
    let id = response.body["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "PUT",
            &format!("/api/courses/{id}"),
            Some(json!({
                "passThreshold": 80.0,
                "isRequired": true,
                "trackIds": ["t1", "t3"]
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["passThreshold"], 80.0);
    assert_eq!(response.body["isRequired"], true);
    assert_eq!(response.body["trackIds"], json!(["t1", "t3"]));
    assert_eq!(response.body["title"], "Classroom ICT");
}

#[tokio::test]
async fn test_delete_is_soft_and_preserves_enrollments() {
    let app = TestApp::new().await;
    let response = app
        .request(
            "POST",
            "/api/courses",
            Some(json!({ "code": "SCI-301", "title": "Science Methods" })),
        )
        .await;
    let course_id = response.body["id"].as_str().unwrap().to_string();

    let candidate_id = app
        .create_candidate(json!({
            "name": "Hessa",
            "enrollments": [ { "courseCode": "SCI-301" } ]
        }))
        .await;

    let response = app
        .request("DELETE", &format!("/api/courses/{course_id}"), None)
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // Deactivated courses drop out of the listing.
    let response = app.request("GET", "/api/courses", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.as_array().unwrap().is_empty());

    // Historical enrollments still reference the code.
    let response = app
        .request("GET", &format!("/api/candidates/{candidate_id}"), None)
        .await;
    assert_eq!(response.body["enrollments"][0]["courseCode"], "SCI-301");
}

#[tokio::test]
async fn test_delete_unknown_course_404() {
    let app = TestApp::new().await;

    let response = app.request("DELETE", "/api/courses/CR-missing", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
