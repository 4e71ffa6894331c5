use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedSubject;

/// Echo the subject resolved from the bearer token by the auth middleware.
pub async fn principal(
    Extension(authenticated): Extension<AuthenticatedSubject>,
) -> Result<ApiSuccess<PrincipalResponseData>, ApiError> {
    Ok(ApiSuccess::new(
        StatusCode::OK,
        PrincipalResponseData {
            subject: authenticated.subject,
        },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrincipalResponseData {
    pub subject: String,
}
