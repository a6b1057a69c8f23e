//! Referrer classification for click analytics.

use url::Url;

/// Well-known referrer hostnames mapped to friendly labels.
const KNOWN_REFERRERS: &[(&str, &str)] = &[
    ("google.com", "Google"),
    ("google.co.in", "Google"),
    ("facebook.com", "Facebook"),
    ("fb.me", "Facebook"),
    ("twitter.com", "Twitter"),
    ("t.co", "Twitter"),
    ("x.com", "Twitter"),
    ("linkedin.com", "LinkedIn"),
    ("instagram.com", "Instagram"),
    ("reddit.com", "Reddit"),
    ("youtube.com", "YouTube"),
];

/// Classifies a raw `Referer` header value into a label.
///
/// - Absent or malformed referrer → `"Direct"`
/// - Well-known hostname → friendly label (`google.com` → `"Google"`)
/// - Anything else → the bare hostname with a leading `www.` stripped
pub fn classify_referrer(referrer: Option<&str>) -> String {
    let Some(raw) = referrer else {
        return "Direct".to_string();
    };

    let Ok(parsed) = Url::parse(raw) else {
        return "Direct".to_string();
    };

    let Some(host) = parsed.host_str() else {
        return "Direct".to_string();
    };

    let host = host.strip_prefix("www.").unwrap_or(host);

    for (known, label) in KNOWN_REFERRERS {
        if host.eq_ignore_ascii_case(known) {
            return (*label).to_string();
        }
    }

    host.to_string()
}
