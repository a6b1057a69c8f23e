//! Bearer token authentication middleware.
//!
//! Two layers are provided:
//!
//! - [`require`] - protected routes; requests without a valid token get
//!   `401 Unauthorized`
//! - [`optional`] - routes open to anonymous callers that still want to
//!   know who is asking (e.g. custom aliases on `/api/shorten`)
//!
//! [`require`] inserts a [`CurrentUser`] extension; [`optional`] always
//! inserts a [`MaybeUser`].

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::domain::entities::User;
use crate::error::AppError;
use crate::state::AppState;

/// The authenticated caller, injected as a request extension.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Arc<User>);

/// The possibly-anonymous caller, injected by [`optional`] on every
/// request it sees.
#[derive(Debug, Clone)]
pub struct MaybeUser(pub Option<Arc<User>>);

/// Authenticates requests using Bearer tokens from the Authorization
/// header.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// # Errors
///
/// Returns `401 Unauthorized` if:
/// - Authorization header is missing or malformed
/// - Token signature or expiry is invalid
/// - The account encoded in the token no longer exists
pub async fn require(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| AppError::unauthorized("Not authorized, no token"))?;

    let user = state.auth_service.authenticate(&token).await?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(CurrentUser(Arc::new(user)));

    Ok(next.run(req).await)
}

/// Like [`require`], but never rejects: an absent or invalid token simply
/// leaves the request anonymous. Always inserts a [`MaybeUser`].
pub async fn optional(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let (mut parts, body) = req.into_parts();

    let bearer = AuthBearer::from_request_parts(&mut parts, &()).await.ok();

    let mut user = None;
    if let Some(AuthBearer(token)) = bearer
        && let Ok(authenticated) = state.auth_service.authenticate(&token).await
    {
        user = Some(Arc::new(authenticated));
    }

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(MaybeUser(user));

    next.run(req).await
}
