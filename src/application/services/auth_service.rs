//! Account registration, login and bearer-token authentication.

use std::sync::Arc;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Bearer tokens are valid for 30 days.
const TOKEN_TTL_DAYS: i64 = 30;

/// JWT claims carried by a bearer token.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// Account id.
    sub: String,
    iat: i64,
    exp: i64,
}

/// Service for account management and bearer-token authentication.
///
/// Passwords are stored as argon2id hashes. Tokens are HS256 JWTs signed
/// with the secret from the configuration object; the claims carry only
/// the account id and expiry.
pub struct AuthService<R: UserRepository> {
    repository: Arc<R>,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl<R: UserRepository> AuthService<R> {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `repository` - user repository for DB operations
    /// - `jwt_secret` - HS256 signing secret from the application config
    pub fn new(repository: Arc<R>, jwt_secret: &str) -> Self {
        Self {
            repository,
            encoding_key: EncodingKey::from_secret(jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(jwt_secret.as_bytes()),
        }
    }

    /// Registers a new account and issues a bearer token.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] - password shorter than 6 characters
    /// - [`AppError::Conflict`] - email already registered
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<(User, String), AppError> {
        if password.len() < 6 {
            return Err(AppError::bad_request(
                "Password must be at least 6 characters",
            ));
        }

        let email = email.trim().to_lowercase();

        if self.repository.find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict("User already exists with this email"));
        }

        let password_hash = hash_password(password)?;

        let user = self
            .repository
            .create(NewUser {
                name: name.trim().to_string(),
                email,
                password_hash,
            })
            .await?;

        let token = self.issue_token(user.id)?;

        Ok((user, token))
    }

    /// Verifies credentials and issues a bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] with a single indistinct message
    /// for both unknown emails and wrong passwords.
    pub async fn login(&self, email: &str, password: &str) -> Result<(User, String), AppError> {
        let email = email.trim().to_lowercase();

        let user = self
            .repository
            .find_by_email(&email)
            .await?
            .ok_or_else(invalid_credentials)?;

        if !verify_password(password, &user.password_hash)? {
            return Err(invalid_credentials());
        }

        let token = self.issue_token(user.id)?;

        Ok((user, token))
    }

    /// Validates a bearer token and loads the account it belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] for malformed, forged or expired
    /// tokens, and for tokens whose account no longer exists.
    pub async fn authenticate(&self, token: &str) -> Result<User, AppError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map_err(|_| AppError::unauthorized("Not authorized, token failed"))?;

        let user_id: i64 = token_data
            .claims
            .sub
            .parse()
            .map_err(|_| AppError::unauthorized("Not authorized, token failed"))?;

        self.repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::unauthorized("User not found"))
    }

    /// Issues a signed token for an account id.
    fn issue_token(&self, user_id: i64) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::days(TOKEN_TTL_DAYS)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to issue token: {}", e)))
    }
}

fn invalid_credentials() -> AppError {
    AppError::unauthorized("Invalid email or password")
}

/// Hashes a password with argon2id and a fresh random salt.
fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::internal(format!("Failed to hash password: {}", e)))
}

/// Verifies a password against a stored argon2 hash.
fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed_hash =
        PasswordHash::new(hash).map_err(|e| AppError::internal(format!("Invalid hash: {}", e)))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
