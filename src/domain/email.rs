//! Validated developer email address.

use super::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for an email address, matching the `VARCHAR(255)` column.
const MAX_EMAIL_LENGTH: usize = 255;

/// Unique contact address of a developer.
///
/// Only the shape `local@domain` is checked; deliverability is not.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Creates a validated email address.
    ///
    /// The input is trimmed. Exactly one `@` with non-empty parts on both
    /// sides is required, and whitespace is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyEmail`] when the value is blank,
    /// [`DomainError::EmailTooLong`] when it exceeds 255 characters, or
    /// [`DomainError::InvalidEmail`] when it is not of the form
    /// `local@domain`.
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let raw = value.into();
        let normalized = raw.trim();

        if normalized.is_empty() {
            return Err(DomainError::EmptyEmail);
        }

        if normalized.chars().count() > MAX_EMAIL_LENGTH {
            return Err(DomainError::EmailTooLong {
                value: raw,
                max: MAX_EMAIL_LENGTH,
            });
        }

        let mut parts = normalized.split('@');
        let local = parts.next().unwrap_or_default();
        let domain = parts.next().unwrap_or_default();
        let is_valid = !local.is_empty()
            && !domain.is_empty()
            && parts.next().is_none()
            && !normalized.chars().any(char::is_whitespace);

        if !is_valid {
            return Err(DomainError::InvalidEmail(raw));
        }

        Ok(Self(normalized.to_owned()))
    }

    /// Returns the address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
