//! Server configuration read from shuttle secrets

use thiserror::Error;

pub const API_KEY_SECRET: &str = "KINTORE_API_KEY";
pub const RUN_MIGRATIONS_SECRET: &str = "KINTORE_RUN_MIGRATIONS";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a boolean (got: {value})")]
    InvalidBool { key: &'static str, value: String },
}

/// Settings resolved once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Bearer token for /kintore routes; `None` disables authentication
    pub api_key: Option<String>,
    pub run_migrations: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            run_migrations: true,
        }
    }
}

impl AppConfig {
    pub fn from_secrets(secrets: &shuttle_runtime::SecretStore) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| secrets.get(key))
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup(API_KEY_SECRET).filter(|key| !key.trim().is_empty());
        let run_migrations = match lookup(RUN_MIGRATIONS_SECRET) {
            Some(value) => parse_bool(RUN_MIGRATIONS_SECRET, &value)?,
            None => true,
        };

        Ok(Self {
            api_key,
            run_migrations,
        })
    }
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            key,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(config(&[]).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_reads_api_key_and_migration_flag() {
        let cfg = config(&[(API_KEY_SECRET, "abc"), (RUN_MIGRATIONS_SECRET, "false")]).unwrap();
        assert_eq!(cfg.api_key.as_deref(), Some("abc"));
        assert!(!cfg.run_migrations);
    }

    #[test]
    fn test_blank_api_key_disables_auth() {
        let cfg = config(&[(API_KEY_SECRET, "  ")]).unwrap();
        assert!(cfg.api_key.is_none());
    }

    #[test]
    fn test_rejects_bad_bool() {
        let err = config(&[(RUN_MIGRATIONS_SECRET, "sometimes")]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "KINTORE_RUN_MIGRATIONS must be a boolean (got: sometimes)"
        );
    }
}
