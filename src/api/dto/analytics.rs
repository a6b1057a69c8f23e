//! DTOs for analytics endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::repositories::LabelCount;

/// Query parameters for the timeline endpoint.
#[derive(Debug, Deserialize)]
pub struct TimelineQuery {
    /// Window size in days; defaults to 7.
    pub days: Option<i64>,
}

/// One referrer bucket.
#[derive(Debug, Serialize)]
pub struct ReferrerCount {
    pub referrer: String,
    pub count: i64,
}

/// One device-category bucket.
#[derive(Debug, Serialize)]
pub struct DeviceCount {
    pub device: String,
    pub count: i64,
}

/// One country bucket.
#[derive(Debug, Serialize)]
pub struct LocationCount {
    pub country: String,
    pub count: i64,
}

/// One browser bucket.
#[derive(Debug, Serialize)]
pub struct BrowserCount {
    pub browser: String,
    pub count: i64,
}

impl From<LabelCount> for ReferrerCount {
    fn from(row: LabelCount) -> Self {
        Self {
            referrer: row.label,
            count: row.count,
        }
    }
}

impl From<LabelCount> for DeviceCount {
    fn from(row: LabelCount) -> Self {
        Self {
            device: row.label,
            count: row.count,
        }
    }
}

impl From<LabelCount> for LocationCount {
    fn from(row: LabelCount) -> Self {
        Self {
            country: row.label,
            count: row.count,
        }
    }
}

impl From<LabelCount> for BrowserCount {
    fn from(row: LabelCount) -> Self {
        Self {
            browser: row.label,
            count: row.count,
        }
    }
}
