//! Application configuration loaded from environment variables.
//!
//! The two token secrets are explicit inputs rather than ambient globals, so
//! tests supply distinct throwaway secrets per run. Startup refuses a missing
//! secret and refuses equal secrets: the admin and user trust domains must
//! share no key material.

use std::env;

use skola_infra::{DatabaseConfig, JwtConfig};
use thiserror::Error;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub auth: JwtConfig,
    pub database: Option<DatabaseConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set to a non-empty value")]
    MissingSecret(&'static str),

    #[error("ADMIN_JWT_SECRET and USER_JWT_SECRET must not be equal")]
    EqualSecrets,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let admin_secret = require_secret("ADMIN_JWT_SECRET")?;
        let user_secret = require_secret("USER_JWT_SECRET")?;

        if admin_secret == user_secret {
            return Err(ConfigError::EqualSecrets);
        }

        let auth = JwtConfig {
            admin_secret,
            user_secret,
            expiration_hours: env::var("JWT_EXPIRATION_HOURS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(24),
            issuer: env::var("JWT_ISSUER").unwrap_or_else(|_| "skola-api".to_string()),
        };

        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(100),
            min_connections: env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),
        });

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            auth,
            database,
        })
    }
}

fn require_secret(name: &'static str) -> Result<String, ConfigError> {
    env::var(name)
        .ok()
        .filter(|s| !s.is_empty())
        .ok_or(ConfigError::MissingSecret(name))
}
