mod common;

use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, header};
use axum_test::TestServer;
use sqlx::PgPool;

use urlite::domain::click_worker::run_click_worker;
use urlite::infrastructure::geoip::GeoLocator;
use urlite::infrastructure::persistence::PgClickRepository;

#[sqlx::test]
async fn test_redirect_known_code(pool: PgPool) {
    let (state, mut rx) = common::create_test_state(pool.clone());
    let link_id =
        common::create_test_link(&pool, "abc123", "https://example.com/page", None).await;

    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server.get("/abc123").await;

    response.assert_status(axum::http::StatusCode::FOUND);
    assert_eq!(
        response.headers().get(header::LOCATION).unwrap(),
        "https://example.com/page"
    );

    // The redirect enqueues exactly one raw click capture.
    let event = rx.try_recv().unwrap();
    assert_eq!(event.link_id, link_id);
}

#[sqlx::test]
async fn test_redirect_increments_click_counter(pool: PgPool) {
    let (state, _rx) = common::create_test_state(pool.clone());
    let link_id =
        common::create_test_link(&pool, "abc123", "https://example.com/page", None).await;

    let server = TestServer::new(common::test_app(state)).unwrap();

    for _ in 0..3 {
        let response = server.get("/abc123").await;
        response.assert_status(axum::http::StatusCode::FOUND);
    }

    assert_eq!(common::link_click_counter(&pool, link_id).await, 3);
}

#[sqlx::test]
async fn test_redirect_unknown_code(pool: PgPool) {
    let (state, mut rx) = common::create_test_state(pool.clone());
    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server.get("/missing").await;

    response.assert_status_not_found();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"], "Short URL not found");

    // No click capture for a failed resolution.
    assert!(rx.try_recv().is_err());

    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM link_clicks")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(total, 0);
}

#[sqlx::test]
async fn test_click_event_recorded_by_worker(pool: PgPool) {
    let (state, rx) = common::create_test_state(pool.clone());
    let link_id =
        common::create_test_link(&pool, "abc123", "https://example.com/page", None).await;

    // Wire the worker exactly as the server does, with an unroutable
    // geolocation endpoint so public IPs fail fast to Unknown.
    let geo = Arc::new(
        GeoLocator::new("http://127.0.0.1:1/{ip}", Duration::from_millis(200)).unwrap(),
    );
    let clicks = Arc::new(PgClickRepository::new(Arc::new(pool.clone())));
    tokio::spawn(run_click_worker(rx, clicks, geo, 2));

    let server = TestServer::new(common::test_app(state)).unwrap();

    let response = server
        .get("/abc123")
        .add_header(
            HeaderName::from_static("x-forwarded-for"),
            HeaderValue::from_static("127.0.0.1"),
        )
        .add_header(
            header::USER_AGENT,
            HeaderValue::from_static(
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
            ),
        )
        .add_header(
            header::REFERER,
            HeaderValue::from_static("https://www.google.com/search?q=x"),
        )
        .await;

    response.assert_status(axum::http::StatusCode::FOUND);

    // The click event lands asynchronously; poll for it.
    let mut recorded = 0;
    for _ in 0..50 {
        recorded = common::count_clicks(&pool, link_id).await;
        if recorded > 0 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(100)).await;
    }
    assert_eq!(recorded, 1);

    let (referrer, ip, country, device, browser): (String, Option<String>, String, String, String) =
        sqlx::query_as(
            r#"
            SELECT referrer, ip, country, device, browser
            FROM link_clicks
            WHERE link_id = $1
            "#,
        )
        .bind(link_id)
        .fetch_one(&pool)
        .await
        .unwrap();

    assert_eq!(referrer, "Google");
    assert_eq!(ip.as_deref(), Some("127.0.0.1"));
    assert_eq!(country, "Local");
    assert_eq!(device, "Desktop");
    assert_eq!(browser, "Chrome");
}

#[sqlx::test]
async fn test_redirect_does_not_wait_for_full_queue(pool: PgPool) {
    // A single-slot channel that nobody drains: the second redirect must
    // still succeed, dropping its click event.
    let (tx, _rx) = tokio::sync::mpsc::channel(1);
    let state = urlite::AppState::new(
        Arc::new(pool.clone()),
        common::TEST_BASE_URL.to_string(),
        common::TEST_JWT_SECRET,
        tx,
    );

    common::create_test_link(&pool, "abc123", "https://example.com/page", None).await;

    let server = TestServer::new(common::test_app(state)).unwrap();

    for _ in 0..3 {
        let response = server.get("/abc123").await;
        response.assert_status(axum::http::StatusCode::FOUND);
    }
}
