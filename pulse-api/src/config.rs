use std::path::Path;

use pulse_core::{ConfigError, PulseError};
use serde::Deserialize;
use tracing::info;

/// Application configuration, read from an optional TOML file. The path
/// comes from `REDDITPULSE_CONFIG` (default `redditpulse.toml`); a missing
/// file means defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub web_host: String,
    pub web_port: u16,
    pub user_agent: String,
    pub search_limit: u32,
    pub request_timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            web_host: "0.0.0.0".to_string(),
            web_port: 8080,
            user_agent: "RedditPulse/1.0".to_string(),
            search_limit: 100,
            request_timeout_secs: 30,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, PulseError> {
        let path = std::env::var("REDDITPULSE_CONFIG")
            .unwrap_or_else(|_| "redditpulse.toml".to_string());
        if !Path::new(&path).exists() {
            info!("No configuration file at {path}, using defaults");
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)?;
        let config = Self::from_toml(&raw)?;
        info!(path = %path, "Loaded configuration");
        Ok(config)
    }

    pub fn from_toml(raw: &str) -> Result<Self, PulseError> {
        let config: Self = toml::from_str(raw).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Reddit caps search listings at 100 items per request.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.search_limit == 0 || self.search_limit > 100 {
            return Err(ConfigError::InvalidValue {
                field: "search_limit".to_string(),
                value: self.search_limit.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.search_limit, 100);
        assert_eq!(config.web_port, 8080);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config = AppConfig::from_toml("web_port = 9000\nsearch_limit = 25\n").unwrap();
        assert_eq!(config.web_port, 9000);
        assert_eq!(config.search_limit, 25);
        assert_eq!(config.user_agent, "RedditPulse/1.0");
    }

    #[test]
    fn out_of_range_search_limit_is_rejected() {
        let err = AppConfig::from_toml("search_limit = 0\n").unwrap_err();
        assert!(matches!(
            err,
            PulseError::Config(ConfigError::InvalidValue { .. })
        ));

        let err = AppConfig::from_toml("search_limit = 250\n").unwrap_err();
        assert!(matches!(err, PulseError::Config(_)));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = AppConfig::from_toml("web_port = \"not a port\"\n").unwrap_err();
        assert!(matches!(
            err,
            PulseError::Config(ConfigError::Parse(_))
        ));
    }
}
