//! Configuration loading for the Rialto console.
//!
//! All fields are required unless explicitly marked optional. No defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConsoleConfig {
    pub api_base_url: String,
    /// Login boundary the shell redirects to when a request comes back 401.
    pub login_url: String,
    pub auth: AuthConfig,
    pub request_timeout_ms: u64,
    /// Rows per page for every table; filter changes reset to page 1.
    pub page_size: u32,
    /// Upper bound for the unpaginated export fetch.
    pub export_limit: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthConfig {
    pub api_key: Option<String>,
    pub bearer_token: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing configuration file path (use --config or RIALTO_CONSOLE_CONFIG)")]
    MissingConfigPath,
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

impl ConsoleConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path_from_args().or_else(config_path_from_env);
        let path = path.ok_or(ConfigError::MissingConfigPath)?;
        let config = Self::from_path(&path)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: ConsoleConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "api_base_url",
                reason: "must not be empty".to_string(),
            });
        }
        if self.login_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "login_url",
                reason: "must not be empty".to_string(),
            });
        }
        if self.auth.api_key.is_none() && self.auth.bearer_token.is_none() {
            return Err(ConfigError::InvalidValue {
                field: "auth",
                reason: "api_key or bearer_token must be provided".to_string(),
            });
        }
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_ms",
                reason: "must be > 0".to_string(),
            });
        }
        if self.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                field: "page_size",
                reason: "must be > 0".to_string(),
            });
        }
        if self.export_limit < self.page_size {
            return Err(ConfigError::InvalidValue {
                field: "export_limit",
                reason: "must be >= page_size".to_string(),
            });
        }
        Ok(())
    }
}

fn config_path_from_env() -> Option<PathBuf> {
    std::env::var("RIALTO_CONSOLE_CONFIG").ok().map(PathBuf::from)
}

fn config_path_from_args() -> Option<PathBuf> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next().map(PathBuf::from);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_config() -> ConsoleConfig {
        ConsoleConfig {
            api_base_url: "http://localhost:8080".to_string(),
            login_url: "http://localhost:8080/login".to_string(),
            auth: AuthConfig {
                api_key: Some("test-key".to_string()),
                bearer_token: None,
            },
            request_timeout_ms: 5_000,
            page_size: 10,
            export_limit: 10_000,
        }
    }

    #[test]
    fn valid_config_passes() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn config_requires_auth() {
        let mut config = base_config();
        config.auth = AuthConfig {
            api_key: None,
            bearer_token: None,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn config_rejects_zero_page_size() {
        let mut config = base_config();
        config.page_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn config_rejects_export_limit_below_page_size() {
        let mut config = base_config();
        config.export_limit = 5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn config_parses_toml() {
        let toml_src = r#"
            api_base_url = "https://admin.example.com"
            login_url = "https://admin.example.com/login"
            request_timeout_ms = 10000
            page_size = 25
            export_limit = 10000

            [auth]
            bearer_token = "jwt-token"
        "#;
        let config: ConsoleConfig = toml::from_str(toml_src).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.page_size, 25);
    }

    #[test]
    fn config_loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("console.toml");
        std::fs::write(
            &path,
            r#"
                api_base_url = "http://localhost:8080"
                login_url = "http://localhost:8080/login"
                request_timeout_ms = 5000
                page_size = 10
                export_limit = 10000

                [auth]
                api_key = "k"
            "#,
        )
        .unwrap();

        let config = ConsoleConfig::from_path(&path).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.api_base_url, "http://localhost:8080");
    }

    #[test]
    fn config_rejects_unknown_fields() {
        let toml_src = r#"
            api_base_url = "https://admin.example.com"
            login_url = "https://admin.example.com/login"
            request_timeout_ms = 10000
            page_size = 25
            export_limit = 10000
            surprise = true

            [auth]
            api_key = "k"
        "#;
        assert!(toml::from_str::<ConsoleConfig>(toml_src).is_err());
    }
}
