//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A shortened URL with its click counter and optional owner.
///
/// `owner_id` is `None` for anonymous submissions. `clicks` counts
/// successful redirects and is incremented atomically by the storage layer.
#[derive(Debug, Clone, FromRow)]
pub struct Link {
    pub id: i64,
    pub code: String,
    pub original_url: String,
    pub title: Option<String>,
    pub owner_id: Option<i64>,
    pub is_custom: bool,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Returns true if the given user owns this link.
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.owner_id == Some(user_id)
    }

    /// Returns true if the link has no owner (anonymous submission).
    pub fn is_anonymous(&self) -> bool {
        self.owner_id.is_none()
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub code: String,
    pub original_url: String,
    pub title: Option<String>,
    pub owner_id: Option<i64>,
    pub is_custom: bool,
}
