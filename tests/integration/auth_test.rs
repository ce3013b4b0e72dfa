//! Integration tests for registration, login, and user administration.

use http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_register_and_login() {
    let app = TestApp::new().await;

    let user = app
        .register_user("anna@example.com", "password123", "Anna")
        .await;
    assert_eq!(user["email"], "anna@example.com");
    assert_eq!(user["role"], "Teacher");
    assert!(
        user.get("passwordHash").is_none(),
        "Password hash must never be serialized: {user:?}"
    );

    let response = app
        .request(
            "POST",
            "/api/users/auth/login",
            Some(serde_json::json!({
                "email": "anna@example.com",
                "password": "password123",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.get("accessToken").is_some());
    assert!(response.body.get("expiresAt").is_some());
    assert_eq!(response.body["user"]["email"], "anna@example.com");
    assert!(response.body["user"].get("passwordHash").is_none());

    let token = app.login("anna@example.com", "password123").await;
    assert!(!token.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_email_case_insensitive() {
    let app = TestApp::new().await;
    app.register_user("dup@example.com", "password123", "First")
        .await;

    let response = app
        .request(
            "POST",
            "/api/users/auth/register",
            Some(serde_json::json!({
                "email": "DUP@Example.COM",
                "password": "password456",
                "name": "Second",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = TestApp::new().await;
    app.register_user("bob@example.com", "password123", "Bob")
        .await;

    let response = app
        .request(
            "POST",
            "/api/users/auth/login",
            Some(serde_json::json!({
                "email": "bob@example.com",
                "password": "wrongpassword",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_unknown_email_same_error() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/users/auth/login",
            Some(serde_json::json!({
                "email": "nobody@example.com",
                "password": "password123",
            })),
        )
        .await;

    // Unknown account and bad password are indistinguishable.
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_register_short_password_rejected() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/users/auth/register",
            Some(serde_json::json!({
                "email": "short@example.com",
                "password": "abc",
                "name": "Short",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_and_delete_user() {
    let app = TestApp::new().await;
    app.register_user("carol@example.com", "password123", "Carol")
        .await;

    let response = app
        .request(
            "PUT",
            "/api/users/carol@example.com",
            Some(serde_json::json!({
                "name": "Caroline",
                "verified": true,
                "role": "Manager",
            })),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], "Caroline");
    assert_eq!(response.body["verified"], true);
    assert_eq!(response.body["role"], "Manager");

    let response = app
        .request("DELETE", "/api/users/carol@example.com", None)
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("DELETE", "/api/users/carol@example.com", None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_api_route_is_json_404() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/nope", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/health", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["database"], "connected");
}
