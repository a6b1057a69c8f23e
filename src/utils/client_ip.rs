//! Client IP extraction from forwarding headers.

use std::net::IpAddr;

use axum::http::HeaderMap;

/// Extracts the client IP for a request.
///
/// Priority order:
/// 1. First entry of `X-Forwarded-For`
/// 2. `X-Real-IP`
/// 3. The socket peer address
///
/// Returns `None` when no source yields a non-empty value.
pub fn extract_client_ip(headers: &HeaderMap, peer: Option<IpAddr>) -> Option<String> {
    if let Some(forwarded) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok()) {
        let first = forwarded.split(',').next().unwrap_or("").trim();
        if !first.is_empty() {
            return Some(first.to_string());
        }
    }

    if let Some(real_ip) = headers.get("x-real-ip").and_then(|v| v.to_str().ok()) {
        let real_ip = real_ip.trim();
        if !real_ip.is_empty() {
            return Some(real_ip.to_string());
        }
    }

    peer.map(|ip| ip.to_string())
}

/// Returns true for loopback, private-range, link-local and unspecified
/// addresses, i.e. IPs that an external geolocation service cannot resolve.
pub fn is_local_ip(ip: &str) -> bool {
    let Ok(addr) = ip.parse::<IpAddr>() else {
        return false;
    };

    match addr {
        IpAddr::V4(v4) => {
            v4.is_loopback() || v4.is_private() || v4.is_link_local() || v4.is_unspecified()
        }
        IpAddr::V6(v6) => {
            let segments = v6.segments();
            v6.is_loopback()
                || v6.is_unspecified()
                // fc00::/7 unique local
                || (segments[0] & 0xfe00) == 0xfc00
                // fe80::/10 link local
                || (segments[0] & 0xffc0) == 0xfe80
        }
    }
}
