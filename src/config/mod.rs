//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `WORD_PSYCHIC` prefix and nested values use double underscores as separators.
//! Every value has a default, so the service starts with an empty environment.
//!
//! # Example
//!
//! ```no_run
//! use word_psychic::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod content;
mod error;
mod server;
mod session;

pub use content::ContentConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};
pub use session::{SessionConfig, MAX_SESSION_DURATION_SECS};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment, logging, CORS)
    #[serde(default)]
    pub server: ServerConfig,

    /// Session behavior (question mix, idle eviction, cookie)
    #[serde(default)]
    pub session: SessionConfig,

    /// Word catalog source
    #[serde(default)]
    pub content: ContentConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `WORD_PSYCHIC` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `WORD_PSYCHIC__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `WORD_PSYCHIC__SESSION__IDLE_TTL_SECS=0` -> `session.idle_ttl_secs = 0`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("WORD_PSYCHIC")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.session.validate()?;
        self.content.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 5] = [
        "WORD_PSYCHIC__SERVER__PORT",
        "WORD_PSYCHIC__SERVER__ENVIRONMENT",
        "WORD_PSYCHIC__SESSION__AUTHORED_QUESTION_PROBABILITY",
        "WORD_PSYCHIC__SESSION__IDLE_TTL_SECS",
        "WORD_PSYCHIC__CONTENT__CATALOG_PATH",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.session.cookie_name, "wp_sid");
        assert!(config.content.catalog_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_nested_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("WORD_PSYCHIC__SERVER__PORT", "3000");
        env::set_var("WORD_PSYCHIC__SESSION__AUTHORED_QUESTION_PROBABILITY", "0.5");
        env::set_var("WORD_PSYCHIC__SESSION__IDLE_TTL_SECS", "0");
        env::set_var("WORD_PSYCHIC__CONTENT__CATALOG_PATH", "/srv/catalog.yaml");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.session.authored_question_probability, 0.5);
        assert!(!config.session.eviction_enabled());
        assert_eq!(
            config.content.catalog_path.as_deref(),
            Some(std::path::Path::new("/srv/catalog.yaml"))
        );
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("WORD_PSYCHIC__SERVER__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.is_production());
    }

    #[test]
    fn test_validate_reports_bad_probability() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("WORD_PSYCHIC__SESSION__AUTHORED_QUESTION_PROBABILITY", "2");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidProbability(2.0))
        );
    }
}
