//! Server configuration module

use clap::Parser;
use meet_app::context::AppConfig;
use thiserror::Error;

use crate::config::{
    auth::AuthConfig,
    db::DatabaseConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    payments::PaymentsConfig,
    server::ServerRuntimeConfig,
    storage::{StorageConfig, StorageConfigError},
};

pub(crate) mod auth;
pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod payments;
pub(crate) mod server;
pub(crate) mod storage;

/// Errors raised while turning parsed settings into application settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Storage provider settings are incomplete.
    #[error(transparent)]
    Storage(#[from] StorageConfigError),

    /// The JWT secret is blank.
    #[error("JWT_SECRET cannot be empty")]
    EmptyJwtSecret,
}

/// Meet JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "meet-json", about = "Meet JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Trace export settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Bearer token settings.
    #[command(flatten)]
    pub auth: AuthConfig,

    /// Payment processor settings.
    #[command(flatten)]
    pub payments: PaymentsConfig,

    /// File storage settings.
    #[command(flatten)]
    pub storage: StorageConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }

    /// Settings consumed by the application context.
    ///
    /// # Errors
    ///
    /// Returns an error when the selected storage provider is missing settings
    /// or the JWT secret is blank.
    pub fn app_config(&self) -> Result<AppConfig, ConfigError> {
        if self.auth.jwt_secret.trim().is_empty() {
            return Err(ConfigError::EmptyJwtSecret);
        }

        Ok(AppConfig {
            database_url: self.database.database_url.clone(),
            run_migrations: self.database.run_migrations,
            jwt_secret: self.auth.secret(),
            token_ttl: self.auth.token_ttl(),
            storage: self.storage.settings()?,
            paypal: self.payments.paypal(),
        })
    }
}
