//! Authentication API integration tests
//!
//! Login, profile and logout for both the session and the token strategy.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::assert_error_response;
use crate::common::*;

#[tokio::test]
async fn test_session_login_success() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db, &session_config());
    let user = create_test_user(db.pool(), "test@example.com", "password123").await;

    let response = server
        .post("/authentication")
        .json(&json!({ "email": "test@example.com", "password": "password123" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["user"]["userId"], user.user_id);
    assert_eq!(body["user"]["email"], "test@example.com");
    assert!(body.get("token").is_none());
    assert!(body["user"].get("passwordDigest").is_none());
}

#[tokio::test]
async fn test_session_profile_after_login() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db, &session_config());
    let user = create_test_user(db.pool(), "test@example.com", "password123").await;

    login_with_session(&server, &user).await;

    let response = server.get("/authentication/profile").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["userId"], user.user_id);
    assert_eq!(body["firstName"], "Test");
    assert!(body.get("passwordDigest").is_none());
}

#[tokio::test]
async fn test_session_logout_clears_profile() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db, &session_config());
    let user = create_test_user(db.pool(), "test@example.com", "password123").await;

    login_with_session(&server, &user).await;

    let response = server.post("/authentication/logout").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "message": "Logged out" }));

    let profile: Value = server.get("/authentication/profile").await.json();
    assert_eq!(profile, Value::Null);
}

#[tokio::test]
async fn test_sessions_are_stored_in_database() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db, &session_config());
    let user = create_test_user(db.pool(), "test@example.com", "password123").await;

    login_with_session(&server, &user).await;
    assert_eq!(db.count("tower_sessions").await, 1);

    server.post("/authentication/logout").await.assert_status_ok();
    assert_eq!(db.count("tower_sessions").await, 0);
}

#[tokio::test]
async fn test_session_survives_router_rebuild() {
    let db = TestDatabase::new().await;
    let user = create_test_user(db.pool(), "test@example.com", "password123").await;

    let first = create_test_server(&db, &session_config());
    let response = first
        .post("/authentication")
        .json(&json!({ "email": user.email, "password": user.password }))
        .await;
    response.assert_status_ok();
    let cookie = response.cookie("id");

    // A new router over the same database, as after a restart
    let second = create_test_server(&db, &session_config());
    let profile: Value = second
        .get("/authentication/profile")
        .add_cookie(cookie)
        .await
        .json();
    assert_eq!(profile["userId"], user.user_id);
}

#[tokio::test]
async fn test_anonymous_profile_is_null() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db, &session_config());

    let response = server.get("/authentication/profile").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), Value::Null);
}

#[tokio::test]
async fn test_login_unknown_email() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db, &session_config());
    create_test_user(db.pool(), "test@example.com", "password123").await;

    let response = server
        .post("/authentication")
        .json(&json!({ "email": "other@example.com", "password": "password123" }))
        .await;

    assert_error_response!(
        response,
        StatusCode::NOT_FOUND,
        "Could not find a user with the provided username and password"
    );
}

#[tokio::test]
async fn test_login_wrong_password() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db, &session_config());
    create_test_user(db.pool(), "test@example.com", "password123").await;

    let response = server
        .post("/authentication")
        .json(&json!({ "email": "test@example.com", "password": "wrong" }))
        .await;

    assert_error_response!(
        response,
        StatusCode::UNAUTHORIZED,
        "Password did not match the existing password stored for the user."
    );

    let profile: Value = server.get("/authentication/profile").await.json();
    assert_eq!(profile, Value::Null);
}

#[tokio::test]
async fn test_login_malformed_body() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db, &session_config());

    let response = server
        .post("/authentication")
        .json(&json!({ "email": "test@example.com" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_token_login_returns_token() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db, &token_config());
    let user = create_test_user(db.pool(), "test@example.com", "password123").await;

    let token = login_for_token(&server, &user).await;
    assert_eq!(token.split('.').count(), 3);

    let profile: Value = server
        .get("/authentication/profile")
        .authorization_bearer(&token)
        .await
        .json();
    assert_eq!(profile["userId"], user.user_id);
}

#[tokio::test]
async fn test_token_strategy_ignores_session_cookie() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db, &token_config());
    let user = create_test_user(db.pool(), "test@example.com", "password123").await;

    login_for_token(&server, &user).await;

    // No bearer header: the login must not have created a cookie session
    let profile: Value = server.get("/authentication/profile").await.json();
    assert_eq!(profile, Value::Null);
}

#[tokio::test]
async fn test_token_invalid_bearer_is_anonymous() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db, &token_config());

    let response = server
        .get("/authentication/profile")
        .authorization_bearer("not.a.token")
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), Value::Null);
}

#[tokio::test]
async fn test_token_logout_is_a_no_op() {
    let db = TestDatabase::new().await;
    let server = create_test_server(&db, &token_config());
    let user = create_test_user(db.pool(), "test@example.com", "password123").await;
    let token = login_for_token(&server, &user).await;

    let response = server
        .post("/authentication/logout")
        .authorization_bearer(&token)
        .await;
    assert_eq!(response.json::<Value>(), json!({ "message": "Logged out" }));

    let profile: Value = server
        .get("/authentication/profile")
        .authorization_bearer(&token)
        .await
        .json();
    assert_eq!(profile["userId"], user.user_id);
}
