//! Repository trait for user account data access.

use crate::domain::entities::{NewUser, User};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for user accounts.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Creates a new account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already registered
    /// (the `users.email` unique constraint rejected the insert).
    async fn create(&self, new_user: NewUser) -> Result<User, AppError>;

    /// Finds an account by email (stored lowercased).
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Finds an account by id.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;
}
