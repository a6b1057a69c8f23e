//! DTOs for QR rendering.

use serde::Serialize;

/// A rendered QR code for a short URL.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QrData {
    /// SVG data URL (`data:image/svg+xml;base64,...`).
    pub qr_code: String,
    pub short_url: String,
}
