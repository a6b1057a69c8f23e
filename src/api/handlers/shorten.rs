//! Handler for link shortening endpoint.

use axum::{Extension, Json, extract::State, http::StatusCode};

use crate::api::dto::DataResponse;
use crate::api::dto::links::{LinkData, ShortenRequest};
use crate::api::middleware::auth::MaybeUser;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL.
///
/// # Endpoint
///
/// `POST /api/shorten` - authentication optional; anonymous callers can
/// shorten URLs but only authenticated callers may pick a custom alias.
///
/// # Request Body
///
/// ```json
/// {
///   "originalUrl": "https://example.com/page",
///   "customAlias": "my-link",   // optional, requires auth
///   "title": "Example"          // optional
/// }
/// ```
///
/// # Errors
///
/// - `400` - missing URL, bad scheme, bad alias pattern
/// - `401` - custom alias without authentication
/// - `409` - alias already taken
pub async fn shorten_handler(
    State(state): State<AppState>,
    Extension(MaybeUser(user)): Extension<MaybeUser>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<DataResponse<LinkData>>), AppError> {
    let original_url = payload
        .original_url
        .as_deref()
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| AppError::bad_request("Original URL is required"))?;

    let owner_id = user.as_ref().map(|u| u.id);

    let link = state
        .link_service
        .create_link(original_url, payload.custom_alias, payload.title, owner_id)
        .await?;

    let short_url = state.link_service.short_url(&link.code);

    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new(LinkData::from_link(link, short_url))),
    ))
}
