//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{code}`   - Short link redirect (public)
//! - `GET  /health`   - Health check with DB ping (public)
//! - `/api/*`         - REST API (Bearer token where required)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket; stricter on credential routes
//! - **Authentication** - Required, optional, or absent per route group
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{auth, rate_limit, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let api_protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::require))
        .layer(rate_limit::layer());

    let api_public = api::routes::public_routes().layer(rate_limit::secure_layer());

    let api_shorten = api::routes::optional_auth_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::optional))
        .layer(rate_limit::layer());

    let api_router = Router::new()
        .merge(api_protected)
        .merge(api_public)
        .merge(api_shorten);

    let router = Router::new()
        .route("/{code}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
