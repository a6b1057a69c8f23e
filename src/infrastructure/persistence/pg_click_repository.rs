//! PostgreSQL implementation of click event storage and aggregation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Click, NewClick};
use crate::domain::repositories::{ClickRepository, DayCount, LabelCount};
use crate::error::AppError;

/// PostgreSQL repository for click events.
///
/// Aggregation queries lean on the `(link_id, clicked_at)` and
/// `(link_id, ip)` indexes; grouping and sorting happen in the database.
pub struct PgClickRepository {
    pool: Arc<PgPool>,
}

impl PgClickRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClickRepository for PgClickRepository {
    async fn record(&self, new_click: NewClick) -> Result<Click, AppError> {
        let click = sqlx::query_as::<_, Click>(
            r#"
            INSERT INTO link_clicks
                (link_id, referrer, ip, country, city, device, browser, os, user_agent)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, link_id, clicked_at, referrer, ip, country, city,
                      device, browser, os, user_agent
            "#,
        )
        .bind(new_click.link_id)
        .bind(&new_click.referrer)
        .bind(&new_click.ip)
        .bind(&new_click.country)
        .bind(&new_click.city)
        .bind(&new_click.device)
        .bind(&new_click.browser)
        .bind(&new_click.os)
        .bind(&new_click.user_agent)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(click)
    }

    async fn count_total(&self, link_id: i64) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM link_clicks WHERE link_id = $1",
        )
        .bind(link_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }

    async fn count_unique_visitors(&self, link_id: i64) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(DISTINCT ip) FROM link_clicks WHERE link_id = $1 AND ip IS NOT NULL",
        )
        .bind(link_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }

    async fn count_since(&self, link_id: i64, since: DateTime<Utc>) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM link_clicks WHERE link_id = $1 AND clicked_at >= $2",
        )
        .bind(link_id)
        .bind(since)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }

    async fn count_by_day(
        &self,
        link_id: i64,
        since: DateTime<Utc>,
    ) -> Result<Vec<DayCount>, AppError> {
        let rows = sqlx::query_as::<_, DayCount>(
            r#"
            SELECT (clicked_at AT TIME ZONE 'UTC')::date AS day, COUNT(*) AS clicks
            FROM link_clicks
            WHERE link_id = $1 AND clicked_at >= $2
            GROUP BY day
            ORDER BY day
            "#,
        )
        .bind(link_id)
        .bind(since)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn count_by_referrer(
        &self,
        link_id: i64,
        limit: i64,
    ) -> Result<Vec<LabelCount>, AppError> {
        let rows = sqlx::query_as::<_, LabelCount>(
            r#"
            SELECT referrer AS label, COUNT(*) AS count
            FROM link_clicks
            WHERE link_id = $1
            GROUP BY referrer
            ORDER BY count DESC
            LIMIT $2
            "#,
        )
        .bind(link_id)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn count_by_device(&self, link_id: i64) -> Result<Vec<LabelCount>, AppError> {
        let rows = sqlx::query_as::<_, LabelCount>(
            r#"
            SELECT device AS label, COUNT(*) AS count
            FROM link_clicks
            WHERE link_id = $1
            GROUP BY device
            ORDER BY count DESC
            "#,
        )
        .bind(link_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn count_by_country(
        &self,
        link_id: i64,
        limit: i64,
    ) -> Result<Vec<LabelCount>, AppError> {
        let rows = sqlx::query_as::<_, LabelCount>(
            r#"
            SELECT country AS label, COUNT(*) AS count
            FROM link_clicks
            WHERE link_id = $1
            GROUP BY country
            ORDER BY count DESC
            LIMIT $2
            "#,
        )
        .bind(link_id)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn count_by_browser(
        &self,
        link_id: i64,
        limit: i64,
    ) -> Result<Vec<LabelCount>, AppError> {
        let rows = sqlx::query_as::<_, LabelCount>(
            r#"
            SELECT browser AS label, COUNT(*) AS count
            FROM link_clicks
            WHERE link_id = $1
            GROUP BY browser
            ORDER BY count DESC
            LIMIT $2
            "#,
        )
        .bind(link_id)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }
}
