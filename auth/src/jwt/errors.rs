use thiserror::Error;

/// Error type for token operations.
///
/// Messages never include the token, the subject or the signing key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Token is malformed")]
    Malformed,

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is expired")]
    Expired,

    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),
}
