//! DTOs for registration, login and profile endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::User;

/// Registration request. Presence of all fields is enforced by the
/// handler so the endpoint can answer with its own message; the email
/// format check runs through the validator derive.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: Option<String>,
    #[validate(email(message = "Please provide a valid email"))]
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Login request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Account data plus a fresh bearer token, returned by register/login.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthData {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub token: String,
}

impl AuthData {
    pub fn new(user: User, token: String) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            token,
        }
    }
}

/// Caller profile returned by `/api/auth/me`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileData {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl ProfileData {
    pub fn new(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            created_at: user.created_at,
        }
    }
}
