//! Raw click capture for asynchronous analytics processing.

/// Raw request metadata captured on the redirect hot path.
///
/// Created in the redirect handler and sent over a bounded channel to the
/// background worker, which enriches it (user-agent classification,
/// referrer classification, geolocation) and persists a
/// [`crate::domain::entities::NewClick`]. Keeping only raw header values
/// here means the hot path does no parsing at all.
#[derive(Debug, Clone)]
pub struct ClickContext {
    pub link_id: i64,
    pub ip: Option<String>,
    pub user_agent: Option<String>,
    pub referrer: Option<String>,
}

impl ClickContext {
    pub fn new(
        link_id: i64,
        ip: Option<String>,
        user_agent: Option<&str>,
        referrer: Option<&str>,
    ) -> Self {
        Self {
            link_id,
            ip,
            user_agent: user_agent.map(|s| s.to_string()),
            referrer: referrer.map(|s| s.to_string()),
        }
    }
}
