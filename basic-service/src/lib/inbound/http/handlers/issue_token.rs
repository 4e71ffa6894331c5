use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn issue_token(
    State(state): State<AppState>,
    Path(subject): Path<String>,
) -> Result<ApiSuccess<IssueTokenResponseData>, ApiError> {
    let token = state.token_service.issue(&subject)?;

    tracing::debug!("Token issued");

    Ok(ApiSuccess::new(
        StatusCode::OK,
        IssueTokenResponseData { token },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueTokenResponseData {
    pub token: String,
}
