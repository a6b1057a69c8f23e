//! Shared application state injected into all handlers.

use std::sync::Arc;

use sqlx::PgPool;
use tokio::sync::mpsc;

use crate::application::services::{AnalyticsService, AuthService, LinkService};
use crate::domain::click_context::ClickContext;
use crate::infrastructure::persistence::{PgClickRepository, PgLinkRepository, PgUserRepository};

/// Application state shared across request handlers.
///
/// Holds the service layer wired to the PostgreSQL repositories plus the
/// sender side of the click queue. Configuration values the services need
/// (base URL, JWT secret) are passed in at construction rather than read
/// from globals.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<PgPool>,
    pub link_service: Arc<LinkService<PgLinkRepository>>,
    pub auth_service: Arc<AuthService<PgUserRepository>>,
    pub analytics_service: Arc<AnalyticsService<PgLinkRepository, PgClickRepository>>,
    pub click_tx: mpsc::Sender<ClickContext>,
}

impl AppState {
    /// Wires repositories and services over a shared connection pool.
    pub fn new(
        db: Arc<PgPool>,
        base_url: String,
        jwt_secret: &str,
        click_tx: mpsc::Sender<ClickContext>,
    ) -> Self {
        let link_repository = Arc::new(PgLinkRepository::new(db.clone()));
        let click_repository = Arc::new(PgClickRepository::new(db.clone()));
        let user_repository = Arc::new(PgUserRepository::new(db.clone()));

        Self {
            db,
            link_service: Arc::new(LinkService::new(link_repository.clone(), base_url)),
            auth_service: Arc::new(AuthService::new(user_repository, jwt_secret)),
            analytics_service: Arc::new(AnalyticsService::new(link_repository, click_repository)),
            click_tx,
        }
    }
}
