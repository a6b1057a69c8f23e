//! API route configuration.

use crate::api::handlers::{
    browsers_handler, delete_url_handler, devices_handler, list_urls_handler, locations_handler,
    login_handler, me_handler, qr_handler, referrers_handler, register_handler, shorten_handler,
    summary_handler, timeline_handler, update_url_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post, put},
};

/// Routes protected by Bearer token authentication.
///
/// # Endpoints
///
/// - `GET    /urls`                          - List caller's links
/// - `PUT    /urls/{id}`                     - Update a link's title
/// - `DELETE /urls/{id}`                     - Delete a link and its clicks
/// - `GET    /analytics/{url_id}/summary`    - Headline counters
/// - `GET    /analytics/{url_id}/timeline`   - Daily clicks (zero-filled)
/// - `GET    /analytics/{url_id}/referrers`  - Top referrers
/// - `GET    /analytics/{url_id}/devices`    - Device breakdown
/// - `GET    /analytics/{url_id}/locations`  - Top countries
/// - `GET    /analytics/{url_id}/browsers`   - Top browsers
/// - `GET    /auth/me`                       - Caller profile
/// - `GET    /qr/{url_id}`                   - QR code for a short URL
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/urls", get(list_urls_handler))
        .route(
            "/urls/{id}",
            put(update_url_handler).delete(delete_url_handler),
        )
        .route("/analytics/{url_id}/summary", get(summary_handler))
        .route("/analytics/{url_id}/timeline", get(timeline_handler))
        .route("/analytics/{url_id}/referrers", get(referrers_handler))
        .route("/analytics/{url_id}/devices", get(devices_handler))
        .route("/analytics/{url_id}/locations", get(locations_handler))
        .route("/analytics/{url_id}/browsers", get(browsers_handler))
        .route("/auth/me", get(me_handler))
        .route("/qr/{url_id}", get(qr_handler))
}

/// Public credential routes.
///
/// # Endpoints
///
/// - `POST /auth/register` - Create an account, issue a token
/// - `POST /auth/login`    - Verify credentials, issue a token
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register_handler))
        .route("/auth/login", post(login_handler))
}

/// Routes with optional authentication.
///
/// # Endpoints
///
/// - `POST /shorten` - Create a short link; custom aliases require auth
pub fn optional_auth_routes() -> Router<AppState> {
    Router::new().route("/shorten", post(shorten_handler))
}
