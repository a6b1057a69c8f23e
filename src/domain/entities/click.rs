//! Click event entity: one recorded visit to a short link.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A persisted click event with derived client metadata.
///
/// Rows are append-only: they are written once by the background click
/// worker and never mutated. The redirect path never reads them.
#[derive(Debug, Clone, FromRow)]
pub struct Click {
    pub id: i64,
    pub link_id: i64,
    pub clicked_at: DateTime<Utc>,
    pub referrer: String,
    pub ip: Option<String>,
    pub country: String,
    pub city: String,
    pub device: String,
    pub browser: String,
    pub os: String,
    pub user_agent: Option<String>,
}

/// Input data for recording a click event.
#[derive(Debug, Clone, PartialEq)]
pub struct NewClick {
    pub link_id: i64,
    pub referrer: String,
    pub ip: Option<String>,
    pub country: String,
    pub city: String,
    pub device: String,
    pub browser: String,
    pub os: String,
    pub user_agent: Option<String>,
}
