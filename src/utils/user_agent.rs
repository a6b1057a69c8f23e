//! User-agent classification for click analytics.
//!
//! Uses `woothee` for browser/OS detection. Woothee folds tablets into its
//! `smartphone` category, so the device class is refined with a UA
//! substring check before the category mapping.

use woothee::parser::Parser;

/// Coarse client classification derived from a user-agent string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientInfo {
    /// `Mobile`, `Desktop`, `Tablet`, or `Unknown`.
    pub device: String,
    pub browser: String,
    pub os: String,
}

impl ClientInfo {
    fn unknown() -> Self {
        Self {
            device: "Unknown".to_string(),
            browser: "Unknown".to_string(),
            os: "Unknown".to_string(),
        }
    }
}

/// Classifies a user-agent string into device category, browser and OS.
///
/// Absent or unparseable user agents yield `Unknown` across the board.
pub fn classify_user_agent(user_agent: Option<&str>) -> ClientInfo {
    let Some(ua) = user_agent else {
        return ClientInfo::unknown();
    };

    if ua.trim().is_empty() {
        return ClientInfo::unknown();
    }

    let Some(result) = Parser::new().parse(ua) else {
        return ClientInfo::unknown();
    };

    let device = if is_tablet(ua) {
        "Tablet"
    } else {
        match result.category {
            "smartphone" | "mobilephone" => "Mobile",
            "pc" => "Desktop",
            _ => "Unknown",
        }
    };

    let browser = if result.name == "UNKNOWN" || result.name.is_empty() {
        "Unknown".to_string()
    } else {
        result.name.to_string()
    };

    let os = if result.os == "UNKNOWN" || result.os.is_empty() {
        "Unknown".to_string()
    } else {
        result.os.to_string()
    };

    ClientInfo {
        device: device.to_string(),
        browser,
        os,
    }
}

fn is_tablet(ua: &str) -> bool {
    ua.contains("iPad") || ua.contains("Tablet") || (ua.contains("Android") && !ua.contains("Mobile"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const IPHONE_UA: &str = "Mozilla/5.0 (iPhone; CPU iPhone OS 14_0 like Mac OS X) \
        AppleWebKit/605.1.15 (KHTML, like Gecko) Version/14.0 Mobile/15E148 Safari/604.1";
    const IPAD_UA: &str = "Mozilla/5.0 (iPad; CPU OS 13_0 like Mac OS X) \
        AppleWebKit/605.1.15 (KHTML, like Gecko) Version/13.0 Mobile/15E148 Safari/604.1";
    const WINDOWS_CHROME_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
        AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

    #[test]
    fn test_absent_user_agent() {
        let info = classify_user_agent(None);
        assert_eq!(info.device, "Unknown");
        assert_eq!(info.browser, "Unknown");
        assert_eq!(info.os, "Unknown");
    }

    #[test]
    fn test_empty_user_agent() {
        assert_eq!(classify_user_agent(Some("")), ClientInfo::unknown());
        assert_eq!(classify_user_agent(Some("   ")), ClientInfo::unknown());
    }

    #[test]
    fn test_iphone_is_mobile_safari() {
        let info = classify_user_agent(Some(IPHONE_UA));
        assert_eq!(info.device, "Mobile");
        assert_eq!(info.browser, "Safari");
    }

    #[test]
    fn test_ipad_is_tablet() {
        let info = classify_user_agent(Some(IPAD_UA));
        assert_eq!(info.device, "Tablet");
    }

    #[test]
    fn test_windows_chrome_is_desktop() {
        let info = classify_user_agent(Some(WINDOWS_CHROME_UA));
        assert_eq!(info.device, "Desktop");
        assert_eq!(info.browser, "Chrome");
        assert!(info.os.starts_with("Windows"));
    }

    #[test]
    fn test_android_tablet() {
        let ua = "Mozilla/5.0 (Linux; Android 11; SM-T870) AppleWebKit/537.36 \
            (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
        let info = classify_user_agent(Some(ua));
        assert_eq!(info.device, "Tablet");
    }

    #[test]
    fn test_garbage_user_agent() {
        let info = classify_user_agent(Some("definitely-not-a-browser/0.0"));
        assert_eq!(info.device, "Unknown");
    }
}
