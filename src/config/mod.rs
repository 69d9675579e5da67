//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `FINALTAP` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use finaltap::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod ai;
mod error;
mod server;

pub use ai::{AiConfig, AiProvider};
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use secrecy::SecretString;
use serde::Deserialize;

/// Bare variable name honoured as a fallback for the AI key.
pub const FALLBACK_API_KEY_VAR: &str = "API_KEY";

/// Root application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// AI provider configuration
    #[serde(default)]
    pub ai: AiConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `FINALTAP` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Falls back to `API_KEY` when `FINALTAP__AI__API_KEY` is unset
    ///
    /// # Environment Variable Format
    ///
    /// - `FINALTAP__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `FINALTAP__AI__PROVIDER=openai` -> `ai.provider = OpenAI`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut config: AppConfig = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("FINALTAP")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        if config.ai.api_key.is_none() {
            config.ai.api_key = std::env::var(FALLBACK_API_KEY_VAR)
                .ok()
                .map(SecretString::new);
        }

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.ai.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
