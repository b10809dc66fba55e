use std::env;

use auth::PasswordHasher;
use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// Signing key for issued tokens. Required; there is no default.
    pub secret_key: String,

    #[serde(default = "default_token_ttl_minutes")]
    pub token_ttl_minutes: i64,

    #[serde(default = "default_hash_algorithm")]
    pub hash_algorithm: String,

    /// Seed principals, hashed at startup. The directory is read-only after
    /// that.
    #[serde(default)]
    pub principals: Vec<SeedPrincipal>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SeedPrincipal {
    pub id: String,
    pub password: String,
}

fn default_token_ttl_minutes() -> i64 {
    30
}

fn default_hash_algorithm() -> String {
    PasswordHasher::ALGORITHM.to_string()
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (AUTH__SECRET_KEY, SERVER__HTTP_PORT, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    ///
    /// Fails when `auth.secret_key` is missing or empty, the token TTL is
    /// not positive, or the hash algorithm is not supported.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: AUTH__SECRET_KEY=... overrides auth.secret_key
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.auth.secret_key.is_empty() {
            return Err(ConfigError::Message(
                "auth.secret_key must be set and non-empty".to_string(),
            ));
        }

        if self.auth.token_ttl_minutes <= 0 {
            return Err(ConfigError::Message(
                "auth.token_ttl_minutes must be positive".to_string(),
            ));
        }

        if self.auth.hash_algorithm != PasswordHasher::ALGORITHM {
            return Err(ConfigError::Message(format!(
                "unsupported auth.hash_algorithm: {}",
                self.auth.hash_algorithm
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(secret_key: &str, ttl: i64, algorithm: &str) -> Config {
        Config {
            database: DatabaseConfig {
                url: "postgresql://localhost/faqs".to_string(),
            },
            server: ServerConfig { http_port: 8000 },
            auth: AuthConfig {
                secret_key: secret_key.to_string(),
                token_ttl_minutes: ttl,
                hash_algorithm: algorithm.to_string(),
                principals: Vec::new(),
            },
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(config("a-secret", 30, "argon2id").validate().is_ok());
    }

    #[test]
    fn test_empty_secret_key_is_fatal() {
        assert!(config("", 30, "argon2id").validate().is_err());
    }

    #[test]
    fn test_non_positive_ttl_is_fatal() {
        assert!(config("a-secret", 0, "argon2id").validate().is_err());
        assert!(config("a-secret", -5, "argon2id").validate().is_err());
    }

    #[test]
    fn test_unsupported_hash_algorithm_is_fatal() {
        assert!(config("a-secret", 30, "md5").validate().is_err());
    }
}
