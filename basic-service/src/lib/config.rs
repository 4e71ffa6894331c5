use std::env;
use std::fmt;

use auth::HashCost;
use chrono::Duration;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    #[serde(default)]
    pub password: PasswordConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_hours: i64,
}

/// Upper bound for `jwt.expiration_hours` (100 years).
pub const MAX_EXPIRATION_HOURS: i64 = 100 * 366 * 24;

impl JwtConfig {
    /// Token lifetime as a duration.
    pub fn ttl(&self) -> Result<Duration, ConfigError> {
        Duration::try_hours(self.expiration_hours).ok_or_else(|| {
            ConfigError::Message("jwt.expiration_hours is out of range".to_string())
        })
    }
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("expiration_hours", &self.expiration_hours)
            .finish()
    }
}

/// Argon2 cost used for new credential hashes, and the largest cost
/// accepted from a hash presented for verification.
#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(default)]
pub struct PasswordConfig {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
    pub max_memory_kib: u32,
    pub max_iterations: u32,
    pub max_parallelism: u32,
}

impl PasswordConfig {
    pub fn verify_limit(&self) -> HashCost {
        HashCost {
            memory_kib: self.max_memory_kib,
            iterations: self.max_iterations,
            parallelism: self.max_parallelism,
        }
    }
}

impl Default for PasswordConfig {
    fn default() -> Self {
        let cost = HashCost::default();
        let limit = HashCost::VERIFY_LIMIT;
        Self {
            memory_kib: cost.memory_kib,
            iterations: cost.iterations,
            parallelism: cost.parallelism,
            max_memory_kib: limit.memory_kib,
            max_iterations: limit.iterations,
            max_parallelism: limit.parallelism,
        }
    }
}

impl From<PasswordConfig> for HashCost {
    fn from(config: PasswordConfig) -> Self {
        Self {
            memory_kib: config.memory_kib,
            iterations: config.iterations,
            parallelism: config.parallelism,
        }
    }
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (JWT__SECRET, SERVER__HTTP_PORT, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: JWT__SECRET=... overrides jwt.secret
            .add_source(Environment::default().separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// Reject values the services cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt.secret.is_empty() {
            return Err(ConfigError::Message("jwt.secret must not be empty".to_string()));
        }

        if self.jwt.expiration_hours <= 0 {
            return Err(ConfigError::Message(
                "jwt.expiration_hours must be positive".to_string(),
            ));
        }

        if self.jwt.expiration_hours > MAX_EXPIRATION_HOURS {
            return Err(ConfigError::Message(format!(
                "jwt.expiration_hours must not exceed {}",
                MAX_EXPIRATION_HOURS
            )));
        }

        Ok(())
    }
}
