//! Handlers for the authenticated link management endpoints.

use axum::{
    Extension, Json,
    extract::{Path, State},
};

use crate::api::dto::links::{LinkData, UpdateLinkRequest};
use crate::api::dto::{DataResponse, ListResponse, MessageResponse};
use crate::api::middleware::auth::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the caller's links, newest first.
///
/// # Endpoint
///
/// `GET /api/urls` - requires authentication.
pub async fn list_urls_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<ListResponse<LinkData>>, AppError> {
    let links = state.link_service.list_for_owner(user.id).await?;

    let data = links
        .into_iter()
        .map(|link| {
            let short_url = state.link_service.short_url(&link.code);
            LinkData::from_link(link, short_url)
        })
        .collect();

    Ok(Json(ListResponse::new(data)))
}

/// Updates a link's title.
///
/// # Endpoint
///
/// `PUT /api/urls/{id}` - requires authentication and ownership.
///
/// # Errors
///
/// - `403` - caller does not own the link
/// - `404` - unknown id
pub async fn update_url_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateLinkRequest>,
) -> Result<Json<DataResponse<LinkData>>, AppError> {
    let title = payload.title.filter(|t| !t.trim().is_empty());

    let link = state.link_service.update_title(id, user.id, title).await?;

    let short_url = state.link_service.short_url(&link.code);

    Ok(Json(DataResponse::new(LinkData::from_link(link, short_url))))
}

/// Deletes a link and all of its click events.
///
/// # Endpoint
///
/// `DELETE /api/urls/{id}` - requires authentication and ownership.
///
/// # Errors
///
/// - `403` - caller does not own the link
/// - `404` - unknown id
pub async fn delete_url_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    state.link_service.delete(id, user.id).await?;

    Ok(Json(MessageResponse::new("URL deleted successfully")))
}
