//! User account entity.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A registered account.
///
/// `password_hash` is an argon2id PHC string; the plaintext password never
/// leaves the auth service.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for creating a new account.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}
