mod common;

use chrono::{Duration, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use urlite::domain::entities::NewClick;
use urlite::domain::repositories::ClickRepository;
use urlite::infrastructure::persistence::PgClickRepository;

fn new_click(link_id: i64, referrer: &str, ip: Option<&str>) -> NewClick {
    NewClick {
        link_id,
        referrer: referrer.to_string(),
        ip: ip.map(|s| s.to_string()),
        country: "Unknown".to_string(),
        city: "Unknown".to_string(),
        device: "Unknown".to_string(),
        browser: "Unknown".to_string(),
        os: "Unknown".to_string(),
        user_agent: None,
    }
}

#[sqlx::test]
async fn test_record_click(pool: PgPool) {
    let repo = PgClickRepository::new(Arc::new(pool.clone()));
    let link_id = common::create_test_link(&pool, "abc123", "https://example.com", None).await;

    let click = repo
        .record(NewClick {
            link_id,
            referrer: "Google".to_string(),
            ip: Some("203.0.113.7".to_string()),
            country: "Germany".to_string(),
            city: "Berlin".to_string(),
            device: "Desktop".to_string(),
            browser: "Chrome".to_string(),
            os: "Windows 10".to_string(),
            user_agent: Some("Mozilla/5.0".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(click.link_id, link_id);
    assert_eq!(click.referrer, "Google");
    assert_eq!(click.country, "Germany");
    assert_eq!(click.city, "Berlin");
    assert_eq!(click.ip.as_deref(), Some("203.0.113.7"));
}

#[sqlx::test]
async fn test_counts(pool: PgPool) {
    let repo = PgClickRepository::new(Arc::new(pool.clone()));
    let link_id = common::create_test_link(&pool, "abc123", "https://example.com", None).await;

    repo.record(new_click(link_id, "Direct", Some("1.1.1.1")))
        .await
        .unwrap();
    repo.record(new_click(link_id, "Direct", Some("1.1.1.1")))
        .await
        .unwrap();
    repo.record(new_click(link_id, "Direct", Some("2.2.2.2")))
        .await
        .unwrap();
    repo.record(new_click(link_id, "Direct", None)).await.unwrap();

    assert_eq!(repo.count_total(link_id).await.unwrap(), 4);
    assert_eq!(repo.count_unique_visitors(link_id).await.unwrap(), 2);

    let hour_ago = Utc::now() - Duration::hours(1);
    assert_eq!(repo.count_since(link_id, hour_ago).await.unwrap(), 4);

    let in_future = Utc::now() + Duration::hours(1);
    assert_eq!(repo.count_since(link_id, in_future).await.unwrap(), 0);
}

#[sqlx::test]
async fn test_count_by_day_groups(pool: PgPool) {
    let repo = PgClickRepository::new(Arc::new(pool.clone()));
    let link_id = common::create_test_link(&pool, "abc123", "https://example.com", None).await;

    common::insert_click_at(&pool, link_id, Utc::now()).await;
    common::insert_click_at(&pool, link_id, Utc::now()).await;
    common::insert_click_at(&pool, link_id, Utc::now() - Duration::days(2)).await;

    let since = Utc::now() - Duration::days(7);
    let days = repo.count_by_day(link_id, since).await.unwrap();

    assert_eq!(days.len(), 2);
    // Oldest first.
    assert!(days[0].day < days[1].day);
    assert_eq!(days[0].clicks, 1);
    assert_eq!(days[1].clicks, 2);
}

#[sqlx::test]
async fn test_count_by_referrer_limit_and_order(pool: PgPool) {
    let repo = PgClickRepository::new(Arc::new(pool.clone()));
    let link_id = common::create_test_link(&pool, "abc123", "https://example.com", None).await;

    for _ in 0..3 {
        repo.record(new_click(link_id, "Google", None)).await.unwrap();
    }
    for _ in 0..2 {
        repo.record(new_click(link_id, "Twitter", None)).await.unwrap();
    }
    repo.record(new_click(link_id, "Direct", None)).await.unwrap();

    let rows = repo.count_by_referrer(link_id, 2).await.unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].label, "Google");
    assert_eq!(rows[0].count, 3);
    assert_eq!(rows[1].label, "Twitter");
}

#[sqlx::test]
async fn test_aggregations_scoped_to_link(pool: PgPool) {
    let repo = PgClickRepository::new(Arc::new(pool.clone()));
    let link_a = common::create_test_link(&pool, "link-a", "https://example.com/a", None).await;
    let link_b = common::create_test_link(&pool, "link-b", "https://example.com/b", None).await;

    repo.record(new_click(link_a, "Google", None)).await.unwrap();
    repo.record(new_click(link_b, "Direct", None)).await.unwrap();

    assert_eq!(repo.count_total(link_a).await.unwrap(), 1);

    let rows = repo.count_by_referrer(link_a, 10).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].label, "Google");
}
