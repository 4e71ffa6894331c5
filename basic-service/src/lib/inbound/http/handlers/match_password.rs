use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn match_password(
    State(state): State<AppState>,
    Query(params): Query<MatchPasswordParams>,
) -> Result<ApiSuccess<MatchPasswordResponseData>, ApiError> {
    let hasher = state.credential_hasher.clone();
    let MatchPasswordParams {
        password,
        encoded_password,
    } = params;

    let matched =
        tokio::task::spawn_blocking(move || hasher.verify(&password, &encoded_password))
            .await?
            .map_err(|e| {
                tracing::warn!(error = %e, "Stored hash rejected");
                ApiError::from(e)
            })?;

    Ok(ApiSuccess::new(
        StatusCode::OK,
        MatchPasswordResponseData { matched },
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MatchPasswordParams {
    password: String,
    #[serde(rename = "encodedPassword")]
    encoded_password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchPasswordResponseData {
    pub matched: bool,
}
