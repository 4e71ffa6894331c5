use std::sync::Arc;

use auth::CredentialHasher;
use auth::HashCost;
use auth::TokenService;
use basic_service::inbound::http::router::create_router;

pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
    pub token_service: TokenService,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let token_service = Arc::new(TokenService::new(TEST_SECRET, chrono::Duration::hours(1)));

        // Low cost keeps the suite fast; hashes stay verifiable at any cost
        let credential_hasher = Arc::new(
            CredentialHasher::with_cost(HashCost {
                memory_kib: 1024,
                iterations: 1,
                parallelism: 1,
            })
            .expect("Failed to create credential hasher"),
        );

        let router = create_router(token_service, credential_hasher);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
            token_service: TokenService::new(TEST_SECRET, chrono::Duration::hours(1)),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(&format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(&format!("{}{}", self.address, path))
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Issue a token through the API and return it
    pub async fn issue_token(&self, subject: &str) -> String {
        let response = self
            .get(&format!("/jwt/{}", subject))
            .send()
            .await
            .expect("Failed to execute request");

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["data"]["token"]
            .as_str()
            .expect("Missing token in response")
            .to_string()
    }

    /// Hash a password through the API and return the encoded hash
    pub async fn encode_password(&self, password: &str) -> String {
        let response = self
            .get(&format!("/encode-password/{}", password))
            .send()
            .await
            .expect("Failed to execute request");

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["data"]["encoded_password"]
            .as_str()
            .expect("Missing encoded_password in response")
            .to_string()
    }
}

/// Replace the last character of a token with a different base64url character
pub fn alter_last_char(token: &str) -> String {
    let mut altered = token.to_string();
    let last = altered.pop().unwrap();
    altered.push(if last == 'A' { 'B' } else { 'A' });
    altered
}
