use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::errors::TokenError;

/// Identity claims carried by an issued token.
///
/// Only the subject and the validity window are encoded. The signature
/// covers all three fields together, so none of them can be swapped
/// independently.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user/entity identifier)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Create claims for `subject` valid from `issued_at` for `ttl`.
    ///
    /// # Arguments
    /// * `subject` - Subject identifier
    /// * `issued_at` - Instant the token is issued
    /// * `ttl` - Lifetime of the token
    ///
    /// # Returns
    /// Claims with sub, iat and exp set
    ///
    /// # Errors
    /// * `EncodingFailed` - Expiration falls outside the representable time range
    pub fn new(
        subject: impl ToString,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<Self, TokenError> {
        let expiration = issued_at.checked_add_signed(ttl).ok_or_else(|| {
            TokenError::EncodingFailed("token expiration is out of range".to_string())
        })?;

        Ok(Self {
            sub: subject.to_string(),
            iat: issued_at.timestamp(),
            exp: expiration.timestamp(),
        })
    }

    /// Check if token is expired.
    ///
    /// A token is still valid at the exact second of its expiration.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}
