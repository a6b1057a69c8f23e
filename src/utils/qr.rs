//! QR code rendering for short URLs.

use base64::Engine as _;
use qrcode::QrCode;
use qrcode::render::svg;

use crate::error::AppError;

/// Renders the given content as a QR code and returns an SVG data URL
/// (`data:image/svg+xml;base64,...`) suitable for direct embedding in an
/// `<img>` tag.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the content does not fit into a QR
/// code (only possible for absurdly long URLs).
pub fn render_svg_data_url(content: &str) -> Result<String, AppError> {
    let code = QrCode::new(content.as_bytes())
        .map_err(|e| AppError::internal(format!("Failed to generate QR code: {}", e)))?;

    let image = code
        .render::<svg::Color>()
        .min_dimensions(300, 300)
        .quiet_zone(true)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build();

    let encoded = base64::engine::general_purpose::STANDARD.encode(image);

    Ok(format!("data:image/svg+xml;base64,{}", encoded))
}
