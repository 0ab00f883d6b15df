//! Application configuration
//!
//! Configuration loaded from `.wallet-shell.toml`, with the Infura token
//! optionally supplied through the environment.

use serde::{Deserialize, Serialize};
use std::env;

use crate::network::NETWORK_ETHEREUM_MAINNET;

/// Environment variable holding the Infura project token
pub const INFURA_TOKEN_ENV: &str = "INFURA_TOKEN";

/// Application configuration loaded from `.wallet-shell.toml`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Network id to connect to when none is given on the command line
    #[serde(default = "default_network")]
    pub default_network: String,

    /// Infura project token appended to every RPC endpoint
    #[serde(default)]
    pub infura_token: Option<String>,
}

fn default_network() -> String {
    NETWORK_ETHEREUM_MAINNET.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_network: default_network(),
            infura_token: None,
        }
    }
}

impl AppConfig {
    /// Load config from the first config file found, or use defaults,
    /// then apply the environment
    pub fn load() -> Self {
        Self::load_file().with_env_token(env::var(INFURA_TOKEN_ENV).ok())
    }

    fn load_file() -> Self {
        if let Some(content) = crate::load_config_file() {
            match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Override the token when one is present in the environment
    pub fn with_env_token(mut self, token: Option<String>) -> Self {
        match token.filter(|t| !t.trim().is_empty()) {
            Some(token) => {
                log::debug!("Using Infura token from {}", INFURA_TOKEN_ENV);
                self.infura_token = Some(token);
            }
            None if self.infura_token.is_none() => {
                log::warn!("No Infura token configured, endpoints will be unauthenticated");
            }
            None => {}
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.default_network, "mainnet");
        assert!(config.infura_token.is_none());
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            default_network = "ropsten"
            infura_token = "abc123"
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.default_network, "ropsten");
        assert_eq!(config.infura_token.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_config_deserialize_partial() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_env_token_overrides_file() {
        let config = AppConfig {
            infura_token: Some("from-file".to_string()),
            ..AppConfig::default()
        }
        .with_env_token(Some("from-env".to_string()));
        assert_eq!(config.infura_token.as_deref(), Some("from-env"));
    }

    #[test]
    fn test_blank_env_token_is_ignored() {
        let config = AppConfig {
            infura_token: Some("from-file".to_string()),
            ..AppConfig::default()
        }
        .with_env_token(Some("  ".to_string()));
        assert_eq!(config.infura_token.as_deref(), Some("from-file"));
    }
}
