//! Link creation, resolution and management service.

use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, generate_code_with_length, validate_alias};
use crate::utils::url_validator::validate_url;

/// Random allocation attempts before giving up.
const MAX_ATTEMPTS: usize = 10;

/// Code length used for the last-resort attempts once short codes keep
/// colliding.
const FALLBACK_CODE_LENGTH: usize = 10;

/// Service for creating, resolving and managing shortened links.
///
/// Owns short-code allocation: random 6-character codes with a collision
/// retry loop, or user-supplied custom aliases for authenticated callers.
/// The pre-insert existence checks are an optimization for friendly
/// errors; the `links.code` unique constraint is what actually guarantees
/// uniqueness under concurrent allocation.
pub struct LinkService<L: LinkRepository> {
    repository: Arc<L>,
    base_url: String,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    ///
    /// `base_url` is the public prefix used when rendering short URLs;
    /// it comes from the configuration object, not a global.
    pub fn new(repository: Arc<L>, base_url: String) -> Self {
        Self {
            repository,
            base_url,
        }
    }

    /// Creates a short link.
    ///
    /// # Arguments
    ///
    /// - `original_url` - destination URL (`http`/`https` only)
    /// - `custom_alias` - optional user-chosen code; requires `owner_id`
    /// - `title` - optional display title
    /// - `owner_id` - authenticated caller's account id, if any
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] - bad URL scheme or alias pattern
    /// - [`AppError::Unauthorized`] - custom alias from an anonymous caller
    /// - [`AppError::Conflict`] - alias already taken
    pub async fn create_link(
        &self,
        original_url: &str,
        custom_alias: Option<String>,
        title: Option<String>,
        owner_id: Option<i64>,
    ) -> Result<Link, AppError> {
        let original_url = validate_url(original_url)?;

        let (code, is_custom) = match custom_alias {
            Some(alias) => {
                if owner_id.is_none() {
                    return Err(AppError::unauthorized("Please login to use custom aliases"));
                }

                validate_alias(&alias)?;

                if self.repository.find_by_code(&alias).await?.is_some() {
                    return Err(AppError::conflict(
                        "This custom alias is already taken. Please choose another.",
                    ));
                }

                (alias, true)
            }
            None => (self.allocate_code().await?, false),
        };

        self.repository
            .create(NewLink {
                code,
                original_url,
                title,
                owner_id,
                is_custom,
            })
            .await
    }

    /// Resolves a short code for a redirect, counting the click.
    ///
    /// The counter update is persisted before the caller responds, so a
    /// click is reflected even if the client abandons the connection
    /// right after the redirect.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown codes.
    pub async fn resolve(&self, code: &str) -> Result<Link, AppError> {
        let link = self
            .repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short URL not found"))?;

        self.repository.increment_clicks(link.id).await?;

        Ok(link)
    }

    /// Lists all links owned by a user, newest first.
    pub async fn list_for_owner(&self, owner_id: i64) -> Result<Vec<Link>, AppError> {
        self.repository.list_by_owner(owner_id).await
    }

    /// Updates the title of an owned link; `None` clears it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown ids and
    /// [`AppError::Forbidden`] when the caller does not own the link.
    pub async fn update_title(
        &self,
        id: i64,
        owner_id: i64,
        title: Option<String>,
    ) -> Result<Link, AppError> {
        let link = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("URL not found"))?;

        if !link.is_owned_by(owner_id) {
            return Err(AppError::forbidden("Not authorized to update this URL"));
        }

        self.repository
            .update_title(id, title)
            .await?
            .ok_or_else(|| AppError::not_found("URL not found"))
    }

    /// Deletes an owned link and, via the storage-level cascade, all of
    /// its click events.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for unknown ids and
    /// [`AppError::Forbidden`] when the caller does not own the link.
    pub async fn delete(&self, id: i64, owner_id: i64) -> Result<(), AppError> {
        let link = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("URL not found"))?;

        if !link.is_owned_by(owner_id) {
            return Err(AppError::forbidden("Not authorized to delete this URL"));
        }

        self.repository.delete(id).await?;

        Ok(())
    }

    /// Fetches a link for QR rendering.
    ///
    /// Owned links are restricted to their owner; links without an owner
    /// (anonymous submissions) are accessible to any authenticated caller.
    pub async fn get_for_qr(&self, id: i64, user_id: i64) -> Result<Link, AppError> {
        let link = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("URL not found"))?;

        if !link.is_anonymous() && !link.is_owned_by(user_id) {
            return Err(AppError::forbidden("Not authorized to access this URL"));
        }

        Ok(link)
    }

    /// Constructs the full short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }

    /// Allocates a free random code.
    ///
    /// Collisions are vanishingly rare in a 64^6 code space, so the loop
    /// almost always exits on the first attempt. After eight collisions in
    /// a row the remaining attempts use a longer code instead of looping
    /// forever.
    async fn allocate_code(&self) -> Result<String, AppError> {
        for attempt in 0..MAX_ATTEMPTS {
            let code = if attempt < MAX_ATTEMPTS - 2 {
                generate_code()
            } else {
                generate_code_with_length(FALLBACK_CODE_LENGTH)
            };

            if self.repository.find_by_code(&code).await?.is_none() {
                return Ok(code);
            }

            debug!("Short code collision on attempt {}", attempt + 1);
        }

        Err(AppError::internal("Failed to allocate a unique short code"))
    }
}
