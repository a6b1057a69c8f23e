//! Handler for short URL redirect.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Path, Request, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::domain::click_context::ClickContext;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_ip::extract_client_ip;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}` - public.
///
/// # Request Flow
///
/// 1. Exact-match lookup of the code; unknown codes return 404 with a
///    JSON error body and record nothing
/// 2. The click counter is incremented and persisted before responding,
///    so the count reflects the redirect even if the client disconnects
/// 3. Raw client metadata (IP, user agent, referrer) is pushed onto the
///    click queue for the background worker; a full queue drops the
///    event with a log line
/// 4. `302 Found` with `Location: <original URL>`
///
/// The handler never waits for analytics: enrichment (user-agent and
/// referrer classification, geolocation) happens entirely off this path.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    req: Request,
) -> Result<Response, AppError> {
    let link = state.link_service.resolve(&code).await?;

    let headers = req.headers();

    // Present when the server is driven through
    // `into_make_service_with_connect_info`; absent under test harnesses.
    let peer_ip = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip());

    let ip = extract_client_ip(headers, peer_ip);

    let user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok());

    // Both spellings occur in the wild.
    let referrer = headers
        .get(header::REFERER)
        .or_else(|| headers.get("referrer"))
        .and_then(|v| v.to_str().ok());

    let event = ClickContext::new(link.id, ip, user_agent, referrer);

    if state.click_tx.try_send(event).is_err() {
        warn!("Click queue full, dropping event for link {}", link.id);
    }

    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, link.original_url.clone())],
    )
        .into_response())
}
