use thiserror::Error;

/// Error type for credential hashing operations.
///
/// A wrong password is not an error: `verify` returns `Ok(false)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid hashing cost: {0}")]
    InvalidCost(String),

    #[error("Credential hash is malformed: {0}")]
    MalformedHash(String),

    #[error("Credential hashing failed: {0}")]
    HashingFailed(String),
}
