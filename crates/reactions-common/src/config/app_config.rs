//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).

use serde::Deserialize;
use std::env;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub database: DatabaseConfig,
    pub reactions: ReactionsConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default)]
    pub env: Environment,
    /// Emit JSON logs instead of the human-readable format
    #[serde(default)]
    pub json_logs: bool,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// Reaction behavior settings
#[derive(Debug, Clone, Deserialize)]
pub struct ReactionsConfig {
    /// Reacter type tag used when a query does not name one
    #[serde(default = "default_reacter_type")]
    pub default_reacter_type: String,
    /// Capacity of the in-process event channel
    #[serde(default = "default_event_buffer")]
    pub event_buffer: usize,
}

impl Default for ReactionsConfig {
    fn default() -> Self {
        Self {
            default_reacter_type: default_reacter_type(),
            event_buffer: default_event_buffer(),
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "reactions".to_string()
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_reacter_type() -> String {
    "users".to_string()
}

fn default_event_buffer() -> usize {
    256
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or malformed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let reacter_type = lookup("REACTIONS_DEFAULT_REACTER_TYPE")
            .map(|s| s.trim().to_string())
            .unwrap_or_else(default_reacter_type);
        if reacter_type.is_empty() {
            return Err(ConfigError::InvalidValue(
                "REACTIONS_DEFAULT_REACTER_TYPE",
                "must not be empty".to_string(),
            ));
        }

        let event_buffer = parse_or(&lookup, "REACTIONS_EVENT_BUFFER", default_event_buffer)?;
        if event_buffer == 0 {
            return Err(ConfigError::InvalidValue(
                "REACTIONS_EVENT_BUFFER",
                "must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            app: AppSettings {
                name: lookup("APP_NAME").unwrap_or_else(default_app_name),
                env: lookup("APP_ENV")
                    .and_then(|s| Environment::parse(&s))
                    .unwrap_or_default(),
                json_logs: lookup("LOG_FORMAT")
                    .is_some_and(|s| s.eq_ignore_ascii_case("json")),
            },
            database: DatabaseConfig {
                url: lookup("DATABASE_URL").ok_or(ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: parse_or(
                    &lookup,
                    "DATABASE_MAX_CONNECTIONS",
                    default_max_connections,
                )?,
                min_connections: parse_or(
                    &lookup,
                    "DATABASE_MIN_CONNECTIONS",
                    default_min_connections,
                )?,
            },
            reactions: ReactionsConfig {
                default_reacter_type: reacter_type,
                event_buffer,
            },
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: fn() -> T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key, raw)),
        None => Ok(default()),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_environment_is_production() {
        assert!(!Environment::Development.is_production());
        assert!(!Environment::Staging.is_production());
        assert!(Environment::Production.is_production());
    }

    #[test]
    fn test_environment_is_development() {
        assert!(Environment::Development.is_development());
        assert!(!Environment::Production.is_development());
    }

    #[test]
    fn test_defaults_applied() {
        let config = AppConfig::from_lookup(lookup_from(&[(
            "DATABASE_URL",
            "postgres://localhost/reactions",
        )]))
        .unwrap();

        assert_eq!(config.app.name, "reactions");
        assert_eq!(config.app.env, Environment::Development);
        assert!(!config.app.json_logs);
        assert_eq!(config.database.max_connections, 20);
        assert_eq!(config.database.min_connections, 5);
        assert_eq!(config.reactions.default_reacter_type, "users");
        assert_eq!(config.reactions.event_buffer, 256);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db/reactions"),
            ("APP_ENV", "Production"),
            ("LOG_FORMAT", "JSON"),
            ("REACTIONS_DEFAULT_REACTER_TYPE", "members"),
            ("REACTIONS_EVENT_BUFFER", "16"),
        ]))
        .unwrap();

        assert!(config.app.env.is_production());
        assert!(config.app.json_logs);
        assert_eq!(config.reactions.default_reacter_type, "members");
        assert_eq!(config.reactions.event_buffer, 16);
    }

    #[test]
    fn test_missing_database_url() {
        let err = AppConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("DATABASE_URL")));
    }

    #[test]
    fn test_invalid_numbers_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db/reactions"),
            ("DATABASE_MAX_CONNECTIONS", "many"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue("DATABASE_MAX_CONNECTIONS", _)));

        let err = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://db/reactions"),
            ("REACTIONS_EVENT_BUFFER", "0"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue("REACTIONS_EVENT_BUFFER", _)));
    }
}
