//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `COMFORT_CHECK`
//! prefix with `__` separating nested values, e.g.
//! `COMFORT_CHECK__LOG_FILTER=debug`.

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Persona name must not be empty")]
    EmptyPersona,
}

/// Application environment
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Environment name
    #[serde(default)]
    pub environment: Environment,

    /// Rust log filter directive
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Assistant persona name shown in the guided flow
    #[serde(default = "default_persona")]
    pub persona: String,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads a `.env` file if present (for development), then reads
    /// `COMFORT_CHECK`-prefixed environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the
    /// expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("COMFORT_CHECK")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.persona.trim().is_empty() {
            return Err(ValidationError::EmptyPersona);
        }
        Ok(())
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            log_filter: default_log_filter(),
            persona: default_persona(),
        }
    }
}

fn default_log_filter() -> String {
    "info,comfort_check=debug".to_string()
}

fn default_persona() -> String {
    "Rupa".to_string()
}
