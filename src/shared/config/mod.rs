//! Application configuration module
//!
//! `AppConfig` is built once when the process starts and then shared,
//! read-only, by everything that needs it. Values come from the environment
//! (after the binary has loaded any `.env` file); the builder validates them.

use thiserror::Error;

/// Default listen port
pub const DEFAULT_SERVER_PORT: u16 = 3000;
/// Default upper bound on pooled database connections
pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
/// Default Gemini model
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
/// Default tracing filter
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Key Vault base URI. When unset, secrets are read from the environment.
    pub key_vault_uri: Option<String>,
    /// Listen port
    pub server_port: u16,
    /// Upper bound on pooled database connections
    pub database_max_connections: u32,
    /// Model name handed to the generator
    pub gemini_model: String,
    /// `tracing` filter directive, e.g. `"info,tower_http=debug"`
    pub log_filter: String,
    /// Comma-separated origins allowed by CORS; `None` allows any origin
    pub cors_allowed_origins: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            key_vault_uri: None,
            server_port: DEFAULT_SERVER_PORT,
            database_max_connections: DEFAULT_MAX_CONNECTIONS,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            cors_allowed_origins: None,
        }
    }
}

impl AppConfig {
    /// Create a new AppConfigBuilder
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Load configuration from environment variables
    ///
    /// | Variable | Field |
    /// |---|---|
    /// | `KEY_VAULT_URI` | `key_vault_uri` |
    /// | `SERVER_PORT` | `server_port` |
    /// | `DATABASE_MAX_CONNECTIONS` | `database_max_connections` |
    /// | `GEMINI_MODEL` | `gemini_model` |
    /// | `RUST_LOG` | `log_filter` |
    /// | `CORS_ALLOWED_ORIGINS` | `cors_allowed_origins` |
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut builder = Self::builder();

        if let Some(uri) = non_empty_var("KEY_VAULT_URI") {
            builder = builder.key_vault_uri(uri);
        }
        if let Some(port) = non_empty_var("SERVER_PORT") {
            let port = port
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue("SERVER_PORT", port))?;
            builder = builder.server_port(port);
        }
        if let Some(max) = non_empty_var("DATABASE_MAX_CONNECTIONS") {
            let max = max
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidValue("DATABASE_MAX_CONNECTIONS", max))?;
            builder = builder.database_max_connections(max);
        }
        if let Some(model) = non_empty_var("GEMINI_MODEL") {
            builder = builder.gemini_model(model);
        }
        if let Some(filter) = non_empty_var("RUST_LOG") {
            builder = builder.log_filter(filter);
        }
        if let Some(origins) = non_empty_var("CORS_ALLOWED_ORIGINS") {
            builder = builder.cors_allowed_origins(origins);
        }

        builder.build()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(uri) = &self.key_vault_uri {
            if !(uri.starts_with("https://") || uri.starts_with("http://")) {
                return Err(ConfigError::InvalidUrl(uri.clone()));
            }
        }
        if self.database_max_connections == 0 {
            return Err(ConfigError::InvalidValue(
                "DATABASE_MAX_CONNECTIONS",
                "0".to_string(),
            ));
        }
        if self.gemini_model.trim().is_empty() {
            return Err(ConfigError::MissingValue("GEMINI_MODEL"));
        }
        Ok(())
    }
}

/// Builder for AppConfig
#[derive(Debug, Default)]
pub struct AppConfigBuilder {
    key_vault_uri: Option<String>,
    server_port: Option<u16>,
    database_max_connections: Option<u32>,
    gemini_model: Option<String>,
    log_filter: Option<String>,
    cors_allowed_origins: Option<String>,
}

impl AppConfigBuilder {
    /// Set the Key Vault URI
    pub fn key_vault_uri(mut self, uri: impl Into<String>) -> Self {
        self.key_vault_uri = Some(uri.into());
        self
    }

    /// Set the listen port
    pub fn server_port(mut self, port: u16) -> Self {
        self.server_port = Some(port);
        self
    }

    /// Set the connection pool bound
    pub fn database_max_connections(mut self, max: u32) -> Self {
        self.database_max_connections = Some(max);
        self
    }

    /// Set the Gemini model name
    pub fn gemini_model(mut self, model: impl Into<String>) -> Self {
        self.gemini_model = Some(model.into());
        self
    }

    /// Set the tracing filter directive
    pub fn log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = Some(filter.into());
        self
    }

    /// Set the CORS origin allow-list
    pub fn cors_allowed_origins(mut self, origins: impl Into<String>) -> Self {
        self.cors_allowed_origins = Some(origins.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<AppConfig, ConfigError> {
        let defaults = AppConfig::default();
        let config = AppConfig {
            key_vault_uri: self
                .key_vault_uri
                .map(|uri| uri.trim_end_matches('/').to_string()),
            server_port: self.server_port.unwrap_or(defaults.server_port),
            database_max_connections: self
                .database_max_connections
                .unwrap_or(defaults.database_max_connections),
            gemini_model: self.gemini_model.unwrap_or(defaults.gemini_model),
            log_filter: self.log_filter.unwrap_or(defaults.log_filter),
            cors_allowed_origins: self.cors_allowed_origins,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {0}: {1:?}")]
    InvalidValue(&'static str, String),
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 6] = [
        "KEY_VAULT_URI",
        "SERVER_PORT",
        "DATABASE_MAX_CONNECTIONS",
        "GEMINI_MODEL",
        "RUST_LOG",
        "CORS_ALLOWED_ORIGINS",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn test_builder_defaults() {
        let config = AppConfig::builder().build().unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.gemini_model, "gemini-2.0-flash");
    }

    #[test]
    fn test_builder_trims_trailing_slash() {
        let config = AppConfig::builder()
            .key_vault_uri("https://up2d8.vault.azure.net/")
            .build()
            .unwrap();
        assert_eq!(
            config.key_vault_uri.as_deref(),
            Some("https://up2d8.vault.azure.net")
        );
    }

    #[test]
    fn test_builder_rejects_bad_values() {
        assert_eq!(
            AppConfig::builder().key_vault_uri("vault").build(),
            Err(ConfigError::InvalidUrl("vault".to_string()))
        );
        assert!(AppConfig::builder()
            .database_max_connections(0)
            .build()
            .is_err());
        assert_eq!(
            AppConfig::builder().gemini_model(" ").build(),
            Err(ConfigError::MissingValue("GEMINI_MODEL"))
        );
    }

    #[test]
    #[serial]
    fn test_from_env_reads_variables() {
        clear_env();
        std::env::set_var("KEY_VAULT_URI", "https://kv.example.net");
        std::env::set_var("SERVER_PORT", "8080");
        std::env::set_var("DATABASE_MAX_CONNECTIONS", "4");
        std::env::set_var("CORS_ALLOWED_ORIGINS", "http://localhost:5173");

        let config = AppConfig::from_env().unwrap();
        clear_env();

        assert_eq!(config.key_vault_uri.as_deref(), Some("https://kv.example.net"));
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.database_max_connections, 4);
        assert_eq!(
            config.cors_allowed_origins.as_deref(),
            Some("http://localhost:5173")
        );
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_unparseable_port() {
        clear_env();
        std::env::set_var("SERVER_PORT", "eighty");

        let result = AppConfig::from_env();
        clear_env();

        assert_eq!(
            result,
            Err(ConfigError::InvalidValue("SERVER_PORT", "eighty".to_string()))
        );
    }
}
