use std::sync::Arc;
use std::time::Duration;

use auth::CredentialHasher;
use auth::TokenService;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::encode_password::encode_password;
use super::handlers::issue_token::issue_token;
use super::handlers::match_password::match_password;
use super::handlers::principal::principal;
use super::handlers::verify_token::verify_token;
use super::middleware::authenticate as auth_middleware;

#[derive(Clone)]
pub struct AppState {
    pub token_service: Arc<TokenService>,
    pub credential_hasher: Arc<CredentialHasher>,
}

pub fn create_router(
    token_service: Arc<TokenService>,
    credential_hasher: Arc<CredentialHasher>,
) -> Router {
    let state = AppState {
        token_service,
        credential_hasher,
    };

    let public_routes = Router::new()
        .route("/jwt/:sub", get(issue_token))
        .route("/jwt", post(verify_token))
        .route("/encode-password/:password", get(encode_password))
        .route("/auth/match", post(match_password));

    let protected_routes = Router::new()
        .route("/principal", post(principal))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Paths and headers can carry tokens or passwords, so only the method is recorded
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(method = %request.method(), "Request started");
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .with_state(state)
}
