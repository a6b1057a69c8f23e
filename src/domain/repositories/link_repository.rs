//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing short links.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Creates a new short link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the short code already exists
    /// (the `links.code` unique constraint rejected the insert).
    /// Returns [`AppError::Internal`] on other database errors.
    async fn create(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its short code (exact match).
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Finds a link by its id.
    async fn find_by_id(&self, id: i64) -> Result<Option<Link>, AppError>;

    /// Lists all links owned by a user, newest first.
    async fn list_by_owner(&self, owner_id: i64) -> Result<Vec<Link>, AppError>;

    /// Updates a link's title; `None` clears it.
    ///
    /// Returns the updated link, or `Ok(None)` if the id does not exist.
    async fn update_title(&self, id: i64, title: Option<String>)
    -> Result<Option<Link>, AppError>;

    /// Deletes a link. Associated click events are removed by the
    /// `link_clicks.link_id` FK cascade.
    ///
    /// Returns `true` if a row was deleted.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Atomically increments the click counter for a link.
    ///
    /// A single `UPDATE ... SET clicks = clicks + 1` never loses counts
    /// under concurrent redirects of the same code.
    async fn increment_clicks(&self, id: i64) -> Result<(), AppError>;
}
