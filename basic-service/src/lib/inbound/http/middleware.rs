use axum::extract::Request;
use axum::extract::State;
use axum::http;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;

use super::handlers::ApiError;
use crate::inbound::http::router::AppState;

/// Extension type to store the authenticated subject in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedSubject {
    pub subject: String,
}

/// Middleware that verifies the bearer token and adds its subject to request extensions
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_token_from_header(&req).map_err(IntoResponse::into_response)?;

    let subject = state.token_service.verify(token).map_err(|e| {
        tracing::warn!(error = %e, "Bearer token rejected");
        ApiError::from(e).into_response()
    })?;

    req.extensions_mut().insert(AuthenticatedSubject { subject });

    Ok(next.run(req).await)
}

fn extract_token_from_header(req: &Request) -> Result<&str, ApiError> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| ApiError::Unauthorized("Missing Authorization header".to_string()))?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::Unauthorized("Invalid Authorization header".to_string()))?;

    auth_str.strip_prefix("Bearer ").ok_or_else(|| {
        ApiError::Unauthorized(
            "Invalid Authorization header format. Expected: Bearer <token>".to_string(),
        )
    })
}
