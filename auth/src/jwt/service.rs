use std::fmt;

use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Issues and verifies signed, expiring identity tokens.
///
/// Tokens are JWTs signed with HS256 (HMAC with SHA-256) using a secret
/// fixed at construction. The service holds no mutable state and can be
/// shared freely between threads.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    ttl: Duration,
}

impl TokenService {
    /// Create a new token service.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    /// * `ttl` - Lifetime of every issued token
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            ttl,
        }
    }

    /// Lifetime applied to issued tokens.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a token for `subject`, valid from now for the configured ttl.
    ///
    /// # Errors
    /// * `InvalidInput` - Subject is empty
    /// * `EncodingFailed` - Token encoding failed, or the ttl overflows the expiration
    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        self.issue_at(subject, Utc::now())
    }

    /// Issue a token as if the current time were `now`.
    pub fn issue_at(&self, subject: &str, now: DateTime<Utc>) -> Result<String, TokenError> {
        if subject.is_empty() {
            return Err(TokenError::InvalidInput("subject must not be empty".to_string()));
        }

        let claims = Claims::new(subject, now, self.ttl)?;
        let header = Header::new(self.algorithm);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))
    }

    /// Verify a token and return its subject.
    ///
    /// # Errors
    /// * `Malformed` - Token cannot be parsed into the expected claims
    /// * `InvalidSignature` - Signature does not match (tampering or wrong key)
    /// * `Expired` - Signature is valid but the validity window has elapsed
    pub fn verify(&self, token: &str) -> Result<String, TokenError> {
        self.verify_at(token, Utc::now())
    }

    /// Verify a token as if the current time were `now`.
    ///
    /// The signature is checked before the expiry, so `Expired` is only
    /// ever reported for authentic tokens.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<String, TokenError> {
        let mut validation = Validation::new(self.algorithm);
        // Expiry is checked below against the caller's clock, without leeway
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["sub", "exp"]);

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            let error = match e.kind() {
                ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                    TokenError::InvalidSignature
                }
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Malformed,
            };
            tracing::debug!(kind = ?e.kind(), "Token rejected");
            error
        })?;

        let claims = token_data.claims;

        if claims.sub.is_empty() {
            tracing::debug!("Token rejected: empty subject");
            return Err(TokenError::Malformed);
        }

        if claims.is_expired(now.timestamp()) {
            tracing::debug!(exp = claims.exp, now = now.timestamp(), "Token expired");
            return Err(TokenError::Expired);
        }

        Ok(claims.sub)
    }
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("algorithm", &self.algorithm)
            .field("ttl", &self.ttl)
            .field("secret", &"<redacted>")
            .finish()
    }
}
