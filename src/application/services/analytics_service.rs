//! Click analytics queries with ownership checks.
//!
//! Aggregation itself is delegated to the click repository (and thus the
//! database); this service adds the link lookup, the owner check, and the
//! zero-filling of timeline gaps.

use std::sync::Arc;

use chrono::{Duration, NaiveDate, Utc};
use serde::Serialize;

use crate::domain::entities::Link;
use crate::domain::repositories::{ClickRepository, LabelCount, LinkRepository};
use crate::error::AppError;

/// Grouped aggregations return at most this many rows.
const TOP_LIMIT: i64 = 10;

/// Timeline window bounds, in days.
const MIN_TIMELINE_DAYS: i64 = 1;
const MAX_TIMELINE_DAYS: i64 = 365;

/// Headline counters for a link.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickSummary {
    pub total_clicks: i64,
    pub unique_visitors: i64,
    pub clicks_today: i64,
    pub clicks_this_week: i64,
}

/// One day of the click timeline; days without clicks appear with zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelinePoint {
    pub date: String,
    pub clicks: i64,
}

/// Service for per-link click analytics.
///
/// Every query loads the link first and enforces that the caller owns it:
/// unknown ids yield [`AppError::NotFound`], foreign links
/// [`AppError::Forbidden`].
pub struct AnalyticsService<L: LinkRepository, C: ClickRepository> {
    links: Arc<L>,
    clicks: Arc<C>,
}

impl<L: LinkRepository, C: ClickRepository> AnalyticsService<L, C> {
    /// Creates a new analytics service.
    pub fn new(links: Arc<L>, clicks: Arc<C>) -> Self {
        Self { links, clicks }
    }

    /// Headline counters: total, unique visitors, today, this week.
    pub async fn summary(&self, link_id: i64, user_id: i64) -> Result<ClickSummary, AppError> {
        let link = self.owned_link(link_id, user_id).await?;

        let now = Utc::now();
        let today_start = now
            .date_naive()
            .and_hms_opt(0, 0, 0)
            .expect("midnight is a valid time")
            .and_utc();
        let week_start = now - Duration::days(7);

        let total_clicks = self.clicks.count_total(link.id).await?;
        let unique_visitors = self.clicks.count_unique_visitors(link.id).await?;
        let clicks_today = self.clicks.count_since(link.id, today_start).await?;
        let clicks_this_week = self.clicks.count_since(link.id, week_start).await?;

        Ok(ClickSummary {
            total_clicks,
            unique_visitors,
            clicks_today,
            clicks_this_week,
        })
    }

    /// Daily click counts for the past `days` days (default window 7),
    /// oldest first, with days that saw no clicks zero-filled.
    pub async fn timeline(
        &self,
        link_id: i64,
        user_id: i64,
        days: i64,
    ) -> Result<Vec<TimelinePoint>, AppError> {
        let link = self.owned_link(link_id, user_id).await?;

        let days = days.clamp(MIN_TIMELINE_DAYS, MAX_TIMELINE_DAYS);

        let today = Utc::now().date_naive();
        let start_day = today - Duration::days(days);
        let since = start_day
            .and_hms_opt(0, 0, 0)
            .expect("midnight is a valid time")
            .and_utc();

        let counted = self.clicks.count_by_day(link.id, since).await?;

        Ok(zero_fill(&counted, start_day, today))
    }

    /// Top referrers by click count.
    pub async fn referrers(&self, link_id: i64, user_id: i64)
    -> Result<Vec<LabelCount>, AppError> {
        let link = self.owned_link(link_id, user_id).await?;
        self.clicks.count_by_referrer(link.id, TOP_LIMIT).await
    }

    /// Click counts per device category.
    pub async fn devices(&self, link_id: i64, user_id: i64) -> Result<Vec<LabelCount>, AppError> {
        let link = self.owned_link(link_id, user_id).await?;
        self.clicks.count_by_device(link.id).await
    }

    /// Top countries by click count.
    pub async fn locations(&self, link_id: i64, user_id: i64)
    -> Result<Vec<LabelCount>, AppError> {
        let link = self.owned_link(link_id, user_id).await?;
        self.clicks.count_by_country(link.id, TOP_LIMIT).await
    }

    /// Top browsers by click count.
    pub async fn browsers(&self, link_id: i64, user_id: i64)
    -> Result<Vec<LabelCount>, AppError> {
        let link = self.owned_link(link_id, user_id).await?;
        self.clicks.count_by_browser(link.id, TOP_LIMIT).await
    }

    async fn owned_link(&self, link_id: i64, user_id: i64) -> Result<Link, AppError> {
        let link = self
            .links
            .find_by_id(link_id)
            .await?
            .ok_or_else(|| AppError::not_found("URL not found"))?;

        if !link.is_owned_by(user_id) {
            return Err(AppError::forbidden("Not authorized"));
        }

        Ok(link)
    }
}

/// Expands sparse per-day counts into a dense series over
/// `start..=end`, inserting zero for missing days.
fn zero_fill(
    counted: &[crate::domain::repositories::DayCount],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<TimelinePoint> {
    let mut points = Vec::new();
    let mut day = start;

    while day <= end {
        let clicks = counted
            .iter()
            .find(|c| c.day == day)
            .map(|c| c.clicks)
            .unwrap_or(0);

        points.push(TimelinePoint {
            date: day.format("%Y-%m-%d").to_string(),
            clicks,
        });

        day += Duration::days(1);
    }

    points
}
