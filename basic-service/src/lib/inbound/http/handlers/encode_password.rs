use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn encode_password(
    State(state): State<AppState>,
    Path(password): Path<String>,
) -> Result<ApiSuccess<EncodePasswordResponseData>, ApiError> {
    let hasher = state.credential_hasher.clone();

    // Argon2 is deliberately slow; keep it off the async workers
    let encoded_password =
        tokio::task::spawn_blocking(move || hasher.hash(&password)).await??;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        EncodePasswordResponseData { encoded_password },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodePasswordResponseData {
    pub encoded_password: String,
}
