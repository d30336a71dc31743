//! Engine configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` and `dotenvy` crates. Configuration is
//! loaded with the `VENTURE_COMPASS_` prefix and nested values use double
//! underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use venture_compass::config::EngineConfig;
//!
//! let config = EngineConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;

pub use error::{ConfigError, ValidationError};

use serde::Deserialize;

/// Application environment
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

/// How rules referencing unknown questions are handled at load time.
///
/// Strict fails fast so broken rule tables surface during development;
/// tolerant drops the offending rule with a warning so a stale rule can
/// never take down a production deployment.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RuleValidationPolicy {
    Strict,
    Tolerant,
}

/// Root engine configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Environment name
    #[serde(default)]
    pub environment: Environment,

    /// Rust log filter directive
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Explicit rule-validation override; defaults per environment
    #[serde(default)]
    pub rule_validation: Option<RuleValidationPolicy>,
}

impl EngineConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `VENTURE_COMPASS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into the typed configuration struct
    ///
    /// # Environment Variable Format
    ///
    /// - `VENTURE_COMPASS__ENVIRONMENT=production` -> `environment = Production`
    /// - `VENTURE_COMPASS__RULE_VALIDATION=strict` -> `rule_validation = Some(Strict)`
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
                    .prefix("VENTURE_COMPASS")
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
        if self.log_level.trim().is_empty() {
            return Err(ValidationError::EmptyLogLevel);
        }
        Ok(())
    }

    /// The effective rule-validation policy.
    ///
    /// The explicit override wins; otherwise development and staging
    /// validate strictly while production tolerates and drops bad rules.
    pub fn rule_validation_policy(&self) -> RuleValidationPolicy {
        self.rule_validation.unwrap_or(match self.environment {
            Environment::Development | Environment::Staging => RuleValidationPolicy::Strict,
            Environment::Production => RuleValidationPolicy::Tolerant,
        })
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            log_level: default_log_level(),
            rule_validation: None,
        }
    }
}

fn default_log_level() -> String {
    "info,venture_compass=debug".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("VENTURE_COMPASS__ENVIRONMENT");
        env::remove_var("VENTURE_COMPASS__LOG_LEVEL");
        env::remove_var("VENTURE_COMPASS__RULE_VALIDATION");
    }

    #[test]
    fn test_defaults_without_environment_variables() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = EngineConfig::load().unwrap();

        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.log_level, "info,venture_compass=debug");
        assert_eq!(config.rule_validation, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_environment_from_env_var() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("VENTURE_COMPASS__ENVIRONMENT", "production");
        let config = EngineConfig::load().unwrap();
        clear_env();

        assert!(config.is_production());
    }

    #[test]
    fn test_rule_validation_override() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("VENTURE_COMPASS__ENVIRONMENT", "production");
        env::set_var("VENTURE_COMPASS__RULE_VALIDATION", "strict");
        let config = EngineConfig::load().unwrap();
        clear_env();

        assert_eq!(
            config.rule_validation_policy(),
            RuleValidationPolicy::Strict
        );
    }

    #[test]
    fn test_policy_defaults_per_environment() {
        let development = EngineConfig::default();
        assert_eq!(
            development.rule_validation_policy(),
            RuleValidationPolicy::Strict
        );

        let production = EngineConfig {
            environment: Environment::Production,
            ..EngineConfig::default()
        };
        assert_eq!(
            production.rule_validation_policy(),
            RuleValidationPolicy::Tolerant
        );
    }

    #[test]
    fn test_validation_rejects_empty_log_level() {
        let config = EngineConfig {
            log_level: "  ".to_string(),
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
