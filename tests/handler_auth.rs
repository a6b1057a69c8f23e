mod common;

use axum_test::TestServer;
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test]
async fn test_register_success(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server
        .post("/api/auth/register")
        .json(&json!({
            "name": "New User",
            "email": "New@Example.com",
            "password": "secret123"
        }))
        .await;

    response.assert_status(axum::http::StatusCode::CREATED);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["name"], "New User");
    assert_eq!(body["data"]["email"], "new@example.com");
    assert!(!body["data"]["token"].as_str().unwrap().is_empty());
}

#[sqlx::test]
async fn test_register_duplicate_email(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(common::test_app(state)).unwrap();

    let payload = json!({
        "name": "User",
        "email": "dup@example.com",
        "password": "secret123"
    });

    server.post("/api/auth/register").json(&payload).await;

    let response = server.post("/api/auth/register").json(&payload).await;

    response.assert_status(axum::http::StatusCode::CONFLICT);

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"], "User already exists with this email");
}

#[sqlx::test]
async fn test_register_missing_fields(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server
        .post("/api/auth/register")
        .json(&json!({ "email": "a@b.com" }))
        .await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"], "Please provide all fields");
}

#[sqlx::test]
async fn test_register_short_password(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server
        .post("/api/auth/register")
        .json(&json!({
            "name": "User",
            "email": "a@b.com",
            "password": "abc"
        }))
        .await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"], "Password must be at least 6 characters");
}

#[sqlx::test]
async fn test_register_invalid_email(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server
        .post("/api/auth/register")
        .json(&json!({
            "name": "User",
            "email": "not-an-email",
            "password": "secret123"
        }))
        .await;

    response.assert_status_bad_request();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"], "Please provide a valid email");
}

#[sqlx::test]
async fn test_login_round_trip(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    common::register_test_user(&state, "login@example.com").await;
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server
        .post("/api/auth/login")
        .json(&json!({
            "email": "login@example.com",
            "password": "secret123"
        }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    let token = body["data"]["token"].as_str().unwrap().to_string();

    // The issued token must be accepted by the profile endpoint.
    let me = server
        .get("/api/auth/me")
        .authorization_bearer(&token)
        .await;

    me.assert_status_ok();

    let me_body = me.json::<serde_json::Value>();
    assert_eq!(me_body["data"]["email"], "login@example.com");
    assert!(me_body["data"]["createdAt"].is_string());
}

#[sqlx::test]
async fn test_login_wrong_password(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    common::register_test_user(&state, "login@example.com").await;
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server
        .post("/api/auth/login")
        .json(&json!({
            "email": "login@example.com",
            "password": "wrong-password"
        }))
        .await;

    response.assert_status_unauthorized();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"], "Invalid email or password");
}

#[sqlx::test]
async fn test_login_unknown_email(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server
        .post("/api/auth/login")
        .json(&json!({
            "email": "nobody@example.com",
            "password": "secret123"
        }))
        .await;

    response.assert_status_unauthorized();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"], "Invalid email or password");
}

#[sqlx::test]
async fn test_me_without_token(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server.get("/api/auth/me").await;

    response.assert_status_unauthorized();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"], "Not authorized, no token");
}

#[sqlx::test]
async fn test_me_with_garbage_token(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool);
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server
        .get("/api/auth/me")
        .authorization_bearer("invalid.token.here")
        .await;

    response.assert_status_unauthorized();
}
