//! Integration tests for the candidate lifecycle.

use http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_create_applies_defaults() {
    let app = TestApp::new().await;

    let response = app
        .request("POST", "/api/candidates", Some(json!({ "name": "Fatima" })))
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let body = &response.body;
    assert!(body["id"].as_str().unwrap().starts_with("C-"));
    assert_eq!(body["name"], "Fatima");
    assert_eq!(body["status"], "Imported");
    assert_eq!(body["trackId"], "t1");
    assert_eq!(body["gpa"], 0.0);
    assert_eq!(body["enrollments"], json!([]));
    assert_eq!(body["courseResults"], json!([]));
    assert_eq!(body["notes"], json!([]));
}

#[tokio::test]
async fn test_create_then_fetch_identity() {
    let app = TestApp::new().await;

    let id = app
        .create_candidate(json!({
            "name": "Huda",
            "email": "huda@example.com",
            "subject": "Math",
            "gpa": 3.4,
            "trackId": "t2",
            "sponsor": "moe",
            "enrollments": [
                { "courseCode": "PED-101", "status": "enrolled" },
                { "courseCode": "PED-102" }
            ],
            "courseResults": [
                { "courseCode": "PED-101", "score": 82.5, "passed": true }
            ],
            "notes": [
                { "text": "Strong start", "author": "m@x.com", "role": "Manager" }
            ]
        }))
        .await;

    let response = app.request("GET", &format!("/api/candidates/{id}"), None).await;
    assert_eq!(response.status, StatusCode::OK);
    let body = &response.body;

    assert_eq!(body["id"], json!(id));
    assert_eq!(body["email"], "huda@example.com");
    assert_eq!(body["trackId"], "t2");
    assert_eq!(body["sponsor"], "moe");
    assert_eq!(body["enrollments"].as_array().unwrap().len(), 2);
    // Enrollment order is preserved.
    assert_eq!(body["enrollments"][0]["courseCode"], "PED-101");
    assert_eq!(body["enrollments"][1]["courseCode"], "PED-102");
    assert_eq!(body["courseResults"][0]["score"], 82.5);
    assert_eq!(body["notes"][0]["text"], "Strong start");
}

#[tokio::test]
async fn test_unknown_fields_preserved_in_extra() {
    let app = TestApp::new().await;

    let id = app
        .create_candidate(json!({
            "name": "Noor",
            "cohortYear": 2026,
            "referredBy": "career fair"
        }))
        .await;

    let response = app.request("GET", &format!("/api/candidates/{id}"), None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["extra"]["cohortYear"], 2026);
    assert_eq!(response.body["extra"]["referredBy"], "career fair");
    // Extension keys never shadow fixed fields.
    assert_eq!(response.body["name"], "Noor");
}

#[tokio::test]
async fn test_echoed_body_survives_update_cycles_unchanged() {
    let app = TestApp::new().await;

    let id = app
        .create_candidate(json!({
            "name": "Reem",
            "cohortYear": 2026
        }))
        .await;

    // Read-modify-write twice, echoing the full GET body each time.
    for _ in 0..2 {
        let fetched = app.request("GET", &format!("/api/candidates/{id}"), None).await;
        let response = app
            .request("PUT", &format!("/api/candidates/{id}"), Some(fetched.body))
            .await;
        assert_eq!(response.status, StatusCode::OK);
    }

    let response = app.request("GET", &format!("/api/candidates/{id}"), None).await;
    assert_eq!(response.body["extra"]["cohortYear"], 2026);
    assert!(
        response.body["extra"].get("extra").is_none(),
        "Extension map must not nest on echoed updates: {:?}",
        response.body["extra"]
    );
    assert!(response.body["extra"].get("id").is_none());
    assert!(response.body["extra"].get("createdAt").is_none());
}

#[tokio::test]
async fn test_partial_update_preserves_other_fields() {
    let app = TestApp::new().await;
    let id = app
        .create_candidate(json!({
            "name": "Sara",
            "email": "sara@example.com",
            "gpa": 3.1
        }))
        .await;

    let response = app
        .request(
            "PUT",
            &format!("/api/candidates/{id}"),
            Some(json!({ "status": "Eligible" })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "Eligible");
    assert_eq!(response.body["name"], "Sara");
    assert_eq!(response.body["email"], "sara@example.com");
    assert_eq!(response.body["gpa"], 3.1);
}

#[tokio::test]
async fn test_status_change_is_audited() {
    let app = TestApp::new().await;
    let id = app.create_candidate(json!({ "name": "Omar" })).await;

    app.request(
        "PUT",
        &format!("/api/candidates/{id}"),
        Some(json!({ "status": "Eligible" })),
    )
    .await;

    let response = app
        .request("GET", "/api/audit?eventType=candidate.statusChanged", None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let entries = response.body.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["payload"]["candidateId"], json!(id));
    assert_eq!(entries[0]["payload"]["from"], "Imported");
    assert_eq!(entries[0]["payload"]["to"], "Eligible");
}

#[tokio::test]
async fn test_null_clears_and_absent_preserves() {
    let app = TestApp::new().await;
    let id = app
        .create_candidate(json!({
            "name": "Layla",
            "email": "layla@example.com",
            "mobile": "0501234567"
        }))
        .await;

    let response = app
        .request(
            "PUT",
            &format!("/api/candidates/{id}"),
            Some(json!({ "email": null })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["email"], json!(null));
    // Absent field untouched.
    assert_eq!(response.body["mobile"], "0501234567");
}

#[tokio::test]
async fn test_children_replaced_wholesale() {
    let app = TestApp::new().await;
    let id = app
        .create_candidate(json!({
            "name": "Maha",
            "enrollments": [
                { "courseCode": "PED-101" },
                { "courseCode": "PED-102" }
            ]
        }))
        .await;

    let response = app
        .request(
            "PUT",
            &format!("/api/candidates/{id}"),
            Some(json!({
                "enrollments": [ { "courseCode": "PED-201", "status": "enrolled" } ]
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let enrollments = response.body["enrollments"].as_array().unwrap();
    assert_eq!(enrollments.len(), 1);
    assert_eq!(enrollments[0]["courseCode"], "PED-201");
}

#[tokio::test]
async fn test_delete_cascades_children_and_corrections() {
    let app = TestApp::new().await;
    let id = app
        .create_candidate(json!({
            "name": "Reem",
            "enrollments": [ { "courseCode": "PED-101" } ]
        }))
        .await;

    app.request(
        "POST",
        &format!("/api/candidates/{id}/corrections"),
        Some(json!({
            "text": "GPA is wrong",
            "fromUser": "t@example.com",
            "fromRole": "Teacher",
            "targetRole": "Manager"
        })),
    )
    .await;

    let response = app.request("DELETE", &format!("/api/candidates/{id}"), None).await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app.request("GET", &format!("/api/candidates/{id}"), None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let enrollments: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM enrollments WHERE candidate_id = $1")
        .bind(&id)
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(enrollments, 0);

    let corrections: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM corrections WHERE candidate_id = $1")
        .bind(&id)
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert_eq!(corrections, 0);
}

#[tokio::test]
async fn test_get_unknown_candidate_404() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/candidates/C-missing", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_without_name_rejected() {
    let app = TestApp::new().await;

    let response = app
        .request("POST", "/api/candidates", Some(json!({ "name": "  " })))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_is_newest_first() {
    let app = TestApp::new().await;
    app.create_candidate(json!({ "name": "First" })).await;
    let second = app.create_candidate(json!({ "name": "Second" })).await;

    let response = app.request("GET", "/api/candidates", None).await;
    assert_eq!(response.status, StatusCode::OK);
    let list = response.body.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["id"], serde_json::json!(second));
}
