//! Handlers for the per-link analytics endpoints.
//!
//! All endpoints require authentication and ownership of the link;
//! aggregation happens in the database via the analytics service.

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
};

use crate::api::dto::DataResponse;
use crate::api::dto::analytics::{
    BrowserCount, DeviceCount, LocationCount, ReferrerCount, TimelineQuery,
};
use crate::api::middleware::auth::CurrentUser;
use crate::application::services::{ClickSummary, TimelinePoint};
use crate::error::AppError;
use crate::state::AppState;

const DEFAULT_TIMELINE_DAYS: i64 = 7;

/// `GET /api/analytics/{urlId}/summary` - headline counters.
pub async fn summary_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(url_id): Path<i64>,
) -> Result<Json<DataResponse<ClickSummary>>, AppError> {
    let summary = state.analytics_service.summary(url_id, user.id).await?;

    Ok(Json(DataResponse::new(summary)))
}

/// `GET /api/analytics/{urlId}/timeline?days=7` - daily clicks, zero-filled.
pub async fn timeline_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(url_id): Path<i64>,
    Query(query): Query<TimelineQuery>,
) -> Result<Json<DataResponse<Vec<TimelinePoint>>>, AppError> {
    let days = query.days.unwrap_or(DEFAULT_TIMELINE_DAYS);

    let timeline = state
        .analytics_service
        .timeline(url_id, user.id, days)
        .await?;

    Ok(Json(DataResponse::new(timeline)))
}

/// `GET /api/analytics/{urlId}/referrers` - top referrers.
pub async fn referrers_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(url_id): Path<i64>,
) -> Result<Json<DataResponse<Vec<ReferrerCount>>>, AppError> {
    let rows = state.analytics_service.referrers(url_id, user.id).await?;

    Ok(Json(DataResponse::new(
        rows.into_iter().map(ReferrerCount::from).collect(),
    )))
}

/// `GET /api/analytics/{urlId}/devices` - device breakdown.
pub async fn devices_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(url_id): Path<i64>,
) -> Result<Json<DataResponse<Vec<DeviceCount>>>, AppError> {
    let rows = state.analytics_service.devices(url_id, user.id).await?;

    Ok(Json(DataResponse::new(
        rows.into_iter().map(DeviceCount::from).collect(),
    )))
}

/// `GET /api/analytics/{urlId}/locations` - top countries.
pub async fn locations_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(url_id): Path<i64>,
) -> Result<Json<DataResponse<Vec<LocationCount>>>, AppError> {
    let rows = state.analytics_service.locations(url_id, user.id).await?;

    Ok(Json(DataResponse::new(
        rows.into_iter().map(LocationCount::from).collect(),
    )))
}

/// `GET /api/analytics/{urlId}/browsers` - top browsers.
pub async fn browsers_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(url_id): Path<i64>,
) -> Result<Json<DataResponse<Vec<BrowserCount>>>, AppError> {
    let rows = state.analytics_service.browsers(url_id, user.id).await?;

    Ok(Json(DataResponse::new(
        rows.into_iter().map(BrowserCount::from).collect(),
    )))
}
