mod analytics_service;
mod auth_service;
mod link_service;

pub use analytics_service::{AnalyticsService, ClickSummary, TimelinePoint};
pub use auth_service::AuthService;
pub use link_service::LinkService;
