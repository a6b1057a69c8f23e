#![allow(dead_code)]

use axum::routing::get;
use axum::{Router, middleware};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use tokio::sync::mpsc;

use urlite::api::handlers::{health_handler, redirect_handler};
use urlite::api::middleware::auth;
use urlite::api::routes;
use urlite::domain::click_context::ClickContext;
use urlite::state::AppState;

pub const TEST_BASE_URL: &str = "http://localhost:3000";
pub const TEST_JWT_SECRET: &str = "test-signing-secret";

/// Builds an [`AppState`] over the test pool plus the receiving end of
/// the click queue, so tests can observe what the redirect path emits.
pub fn create_test_state(pool: PgPool) -> (AppState, mpsc::Receiver<ClickContext>) {
    let (tx, rx) = mpsc::channel(100);

    let state = AppState::new(
        Arc::new(pool),
        TEST_BASE_URL.to_string(),
        TEST_JWT_SECRET,
        tx,
    );

    (state, rx)
}

/// The full application router minus the rate-limiting layers, which
/// need socket peer addresses that `TestServer` does not provide.
pub fn test_app(state: AppState) -> Router {
    let protected = routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::require));

    let public = routes::public_routes();

    let shorten = routes::optional_auth_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::optional));

    let api_router = Router::new().merge(protected).merge(public).merge(shorten);

    Router::new()
        .route("/{code}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
}

/// Registers an account through the auth service and returns its id and
/// a valid bearer token.
pub async fn register_test_user(state: &AppState, email: &str) -> (i64, String) {
    let (user, token) = state
        .auth_service
        .register("Test User", email, "secret123")
        .await
        .unwrap();

    (user.id, token)
}

pub async fn create_test_link(
    pool: &PgPool,
    code: &str,
    url: &str,
    owner_id: Option<i64>,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO links (code, original_url, owner_id) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(code)
    .bind(url)
    .bind(owner_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_link_created_at(
    pool: &PgPool,
    code: &str,
    url: &str,
    owner_id: Option<i64>,
    created_at: DateTime<Utc>,
) -> i64 {
    sqlx::query_scalar(
        r#"
        INSERT INTO links (code, original_url, owner_id, created_at)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(code)
    .bind(url)
    .bind(owner_id)
    .bind(created_at)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Inserts a click row with explicit classification fields.
pub async fn insert_click(
    pool: &PgPool,
    link_id: i64,
    referrer: &str,
    ip: Option<&str>,
    country: &str,
    device: &str,
    browser: &str,
) {
    sqlx::query(
        r#"
        INSERT INTO link_clicks (link_id, referrer, ip, country, device, browser)
        VALUES ($1, $2, $3, $4, $5, $6)
        "#,
    )
    .bind(link_id)
    .bind(referrer)
    .bind(ip)
    .bind(country)
    .bind(device)
    .bind(browser)
    .execute(pool)
    .await
    .unwrap();
}

/// Inserts a click row stamped at an arbitrary time.
pub async fn insert_click_at(pool: &PgPool, link_id: i64, clicked_at: DateTime<Utc>) {
    sqlx::query("INSERT INTO link_clicks (link_id, clicked_at) VALUES ($1, $2)")
        .bind(link_id)
        .bind(clicked_at)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_clicks(pool: &PgPool, link_id: i64) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM link_clicks WHERE link_id = $1")
        .bind(link_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn link_click_counter(pool: &PgPool, link_id: i64) -> i64 {
    sqlx::query_scalar("SELECT clicks FROM links WHERE id = $1")
        .bind(link_id)
        .fetch_one(pool)
        .await
        .unwrap()
}
