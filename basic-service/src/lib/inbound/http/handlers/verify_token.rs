use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn verify_token(
    State(state): State<AppState>,
    Query(params): Query<VerifyTokenParams>,
) -> Result<ApiSuccess<VerifyTokenResponseData>, ApiError> {
    let subject = state.token_service.verify(&params.jwt).map_err(|e| {
        tracing::warn!(error = %e, "Token verification failed");
        ApiError::from(e)
    })?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        VerifyTokenResponseData { subject },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VerifyTokenParams {
    jwt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyTokenResponseData {
    pub subject: String,
}
