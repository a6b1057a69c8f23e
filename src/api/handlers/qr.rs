//! Handler for QR code rendering.

use axum::{
    Extension, Json,
    extract::{Path, State},
};

use crate::api::dto::DataResponse;
use crate::api::dto::qr::QrData;
use crate::api::middleware::auth::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::qr::render_svg_data_url;

/// Renders a QR code for a link's short URL.
///
/// # Endpoint
///
/// `GET /api/qr/{urlId}` - requires authentication. Owned links are
/// restricted to their owner; links without an owner are accessible to
/// any authenticated caller.
///
/// # Errors
///
/// - `403` - link belongs to another account
/// - `404` - unknown id
pub async fn qr_handler(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(url_id): Path<i64>,
) -> Result<Json<DataResponse<QrData>>, AppError> {
    let link = state.link_service.get_for_qr(url_id, user.id).await?;

    let short_url = state.link_service.short_url(&link.code);
    let qr_code = render_svg_data_url(&short_url)?;

    Ok(Json(DataResponse::new(QrData { qr_code, short_url })))
}
