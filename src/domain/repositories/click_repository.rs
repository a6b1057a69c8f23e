//! Repository trait for click event storage and aggregation.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

use crate::domain::entities::{Click, NewClick};
use crate::error::AppError;
use async_trait::async_trait;

/// Click total for a single calendar day (UTC).
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct DayCount {
    pub day: NaiveDate,
    pub clicks: i64,
}

/// A grouped aggregation row: label (referrer, device, country, browser)
/// and the number of clicks carrying it.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct LabelCount {
    pub label: String,
    pub count: i64,
}

/// Repository interface for click events.
///
/// Writes happen only from the background click worker; reads serve the
/// analytics endpoints. Aggregation is delegated to the database.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClickRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Records a single click event.
    async fn record(&self, new_click: NewClick) -> Result<Click, AppError>;

    /// Total clicks recorded for a link.
    async fn count_total(&self, link_id: i64) -> Result<i64, AppError>;

    /// Distinct non-null client IPs seen for a link.
    async fn count_unique_visitors(&self, link_id: i64) -> Result<i64, AppError>;

    /// Clicks recorded at or after the given instant.
    async fn count_since(&self, link_id: i64, since: DateTime<Utc>) -> Result<i64, AppError>;

    /// Clicks per UTC day at or after the given instant, ordered by day.
    /// Days without clicks are absent; the caller zero-fills.
    async fn count_by_day(
        &self,
        link_id: i64,
        since: DateTime<Utc>,
    ) -> Result<Vec<DayCount>, AppError>;

    /// Clicks grouped by referrer label, descending, capped at `limit`.
    async fn count_by_referrer(&self, link_id: i64, limit: i64)
    -> Result<Vec<LabelCount>, AppError>;

    /// Clicks grouped by device category.
    async fn count_by_device(&self, link_id: i64) -> Result<Vec<LabelCount>, AppError>;

    /// Clicks grouped by country, descending, capped at `limit`.
    async fn count_by_country(&self, link_id: i64, limit: i64)
    -> Result<Vec<LabelCount>, AppError>;

    /// Clicks grouped by browser, descending, capped at `limit`.
    async fn count_by_browser(&self, link_id: i64, limit: i64)
    -> Result<Vec<LabelCount>, AppError>;
}
