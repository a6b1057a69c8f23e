//! Coarse IP geolocation via an external HTTP API.
//!
//! The lookup runs only inside the background click worker, so its latency
//! never touches the redirect path. It is strictly best-effort: any
//! failure (timeout, HTTP error, parse error, API `fail` status) yields
//! `Unknown`/`Unknown` instead of an error.

use std::time::Duration;

use anyhow::Result;
use tracing::debug;

use crate::utils::client_ip::is_local_ip;

/// Country and city resolved for a client IP.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeoInfo {
    pub country: String,
    pub city: String,
}

impl GeoInfo {
    /// Placeholder for loopback/private IPs that no external service can
    /// resolve; returned without a network call.
    pub fn local() -> Self {
        Self {
            country: "Local".to_string(),
            city: "Local".to_string(),
        }
    }

    /// Fallback when the lookup fails or returns no answer.
    pub fn unknown() -> Self {
        Self {
            country: "Unknown".to_string(),
            city: "Unknown".to_string(),
        }
    }
}

/// Client for an `ip-api.com`-shaped geolocation endpoint.
///
/// The URL template uses `{ip}` as a placeholder, e.g.
/// `http://ip-api.com/json/{ip}?fields=status,country,city`.
pub struct GeoLocator {
    client: reqwest::Client,
    api_url_template: String,
}

impl GeoLocator {
    /// Creates a locator with the given URL template and request timeout.
    pub fn new(api_url_template: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_url_template: api_url_template.to_string(),
        })
    }

    /// Resolves country and city for a client IP.
    ///
    /// - Missing IP or loopback/private/link-local ranges → `Local`/`Local`
    ///   without a network call
    /// - Any lookup failure → `Unknown`/`Unknown`
    pub async fn lookup(&self, ip: Option<&str>) -> GeoInfo {
        let Some(ip) = ip else {
            return GeoInfo::local();
        };

        if ip.is_empty() || is_local_ip(ip) {
            return GeoInfo::local();
        }

        self.fetch(ip).await.unwrap_or_else(GeoInfo::unknown)
    }

    async fn fetch(&self, ip: &str) -> Option<GeoInfo> {
        let url = self.api_url_template.replace("{ip}", ip);

        let response = match self.client.get(&url).send().await {
            Ok(r) => r,
            Err(e) => {
                debug!("Geolocation request for {} failed: {}", ip, e);
                return None;
            }
        };

        if !response.status().is_success() {
            debug!(
                "Geolocation request for {} returned {}",
                ip,
                response.status()
            );
            return None;
        }

        let body: serde_json::Value = match response.json().await {
            Ok(v) => v,
            Err(e) => {
                debug!("Geolocation response for {} did not parse: {}", ip, e);
                return None;
            }
        };

        // ip-api.com reports errors in-band: {"status": "fail", ...}
        if body["status"].as_str() == Some("fail") {
            return None;
        }

        let country = body["country"]
            .as_str()
            .or_else(|| body["country_name"].as_str())
            .filter(|s| !s.is_empty())
            .unwrap_or("Unknown")
            .to_string();

        let city = body["city"]
            .as_str()
            .filter(|s| !s.is_empty())
            .unwrap_or("Unknown")
            .to_string();

        Some(GeoInfo { country, city })
    }
}
