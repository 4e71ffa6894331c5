//! Authentication primitives
//!
//! Two independent, stateless components:
//! - Token issuance and verification (HS256-signed JWTs with an expiry)
//! - Credential hashing and verification (Argon2id)
//!
//! Both are immutable after construction and safe to share across threads.
//! Neither depends on the other; callers compose them at startup.
//!
//! # Examples
//!
//! ## Tokens
//! ```
//! use auth::TokenService;
//! use chrono::Duration;
//!
//! let tokens = TokenService::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(1));
//! let token = tokens.issue("user@example.com").unwrap();
//! assert_eq!(tokens.verify(&token).unwrap(), "user@example.com");
//! ```
//!
//! ## Credential Hashing
//! ```
//! use auth::CredentialHasher;
//!
//! let hasher = CredentialHasher::new();
//! let hash = hasher.hash("pw123!").unwrap();
//! assert!(hasher.verify("pw123!", &hash).unwrap());
//! assert!(!hasher.verify("wrong", &hash).unwrap());
//! ```

pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use jwt::Claims;
pub use jwt::TokenError;
pub use jwt::TokenService;
pub use password::CredentialError;
pub use password::CredentialHasher;
pub use password::HashCost;
