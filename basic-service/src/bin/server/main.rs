use std::sync::Arc;

use auth::CredentialHasher;
use auth::HashCost;
use auth::TokenService;
use basic_service::config::Config;
use basic_service::inbound::http::router::create_router;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "basic_service=debug,auth=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "basic-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        jwt_expiration_hours = config.jwt.expiration_hours,
        password_memory_kib = config.password.memory_kib,
        password_iterations = config.password.iterations,
        password_parallelism = config.password.parallelism,
        "Configuration loaded"
    );

    let token_service = Arc::new(TokenService::new(
        config.jwt.secret.as_bytes(),
        config.jwt.ttl()?,
    ));
    let hash_cost = HashCost::from(config.password);
    let credential_hasher = Arc::new(
        CredentialHasher::with_cost(hash_cost)?
            .with_verify_limit(config.password.verify_limit().max(hash_cost)),
    );

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(token_service, credential_hasher);

    if let Err(e) = axum::serve(http_listener, http_application).await {
        tracing::error!(error = %e, "Server error");
        return Err(e.into());
    }

    tracing::info!("Server exited successfully");

    Ok(())
}
