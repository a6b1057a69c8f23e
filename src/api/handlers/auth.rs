//! Handlers for registration, login and profile endpoints.

use axum::{Extension, Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::DataResponse;
use crate::api::dto::auth::{AuthData, LoginRequest, ProfileData, RegisterRequest};
use crate::api::middleware::auth::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new account and returns a bearer token.
///
/// # Endpoint
///
/// `POST /api/auth/register` - public.
///
/// # Errors
///
/// - `400` - missing fields, invalid email, short password
/// - `409` - email already registered
pub async fn register_handler(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<DataResponse<AuthData>>), AppError> {
    payload.validate()?;

    let (Some(name), Some(email), Some(password)) =
        (&payload.name, &payload.email, &payload.password)
    else {
        return Err(AppError::bad_request("Please provide all fields"));
    };

    if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
        return Err(AppError::bad_request("Please provide all fields"));
    }

    let (user, token) = state.auth_service.register(name, email, password).await?;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new(AuthData::new(user, token))),
    ))
}

/// Verifies credentials and returns a bearer token.
///
/// # Endpoint
///
/// `POST /api/auth/login` - public.
///
/// # Errors
///
/// - `400` - missing fields
/// - `401` - unknown email or wrong password (indistinct message)
pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<DataResponse<AuthData>>, AppError> {
    let (Some(email), Some(password)) = (&payload.email, &payload.password) else {
        return Err(AppError::bad_request("Please provide email and password"));
    };

    if email.trim().is_empty() || password.is_empty() {
        return Err(AppError::bad_request("Please provide email and password"));
    }

    let (user, token) = state.auth_service.login(email, password).await?;

    Ok(Json(DataResponse::new(AuthData::new(user, token))))
}

/// Returns the caller's profile.
///
/// # Endpoint
///
/// `GET /api/auth/me` - requires authentication.
pub async fn me_handler(
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Json<DataResponse<ProfileData>> {
    Json(DataResponse::new(ProfileData::new(&user)))
}
