//! Secrets Module
//!
//! Every credential the service needs is read from a secret store by a fixed
//! name, once, while the server starts. The resolved values are kept in an
//! immutable [`Secrets`] value that the rest of the startup sequence borrows.
//!
//! # Providers
//!
//! - **`key_vault`** - Azure Key Vault over its REST API, used when
//!   `KEY_VAULT_URI` is configured
//! - **`env`** - environment variables, for local development
//!
//! Both implement [`SecretProvider`]. Failures are never retried.

/// Azure Key Vault provider
pub mod key_vault;

/// Environment-variable provider
pub mod env;

use std::fmt;

use async_trait::async_trait;
use thiserror::Error;

pub use env::EnvSecretProvider;
pub use key_vault::{Credential, KeyVaultClient};

/// Fixed secret names
pub mod names {
    pub const DATABASE_CONNECTION_STRING: &str = "COSMOS-DB-CONNECTION-STRING-UP2D8";
    pub const GEMINI_API_KEY: &str = "UP2D8-GEMINI-API-Key";
    pub const SMTP_KEY: &str = "UP2D8-SMTP-KEY";
    pub const GOOGLE_CLIENT_ID: &str = "GOOGLE-CLIENT-ID";
    pub const GOOGLE_CLIENT_SECRET: &str = "GOOGLE-CLIENT-SECRET";
}

/// Secret store errors
#[derive(Debug, Error)]
pub enum SecretError {
    /// No credential could be obtained, or the store refused it
    #[error("authentication failed: {0}")]
    Authentication(String),

    /// The named secret does not exist
    #[error("secret not found: {0}")]
    NotFound(String),

    /// The HTTP exchange failed
    #[error("secret store request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The store answered with something unexpected
    #[error("unexpected secret store response: {0}")]
    Malformed(String),
}

/// A source of named secrets
#[async_trait]
pub trait SecretProvider: Send + Sync {
    /// Fetch the current value of the secret called `name`
    async fn get_secret(&self, name: &str) -> Result<String, SecretError>;
}

/// Every secret the service loads at startup
///
/// The SMTP key and Google OAuth credentials are loaded with the rest so a
/// misconfigured store fails at startup rather than later.
#[derive(Clone)]
pub struct Secrets {
    pub database_url: String,
    pub gemini_api_key: String,
    pub smtp_key: String,
    pub google_client_id: String,
    pub google_client_secret: String,
}

impl Secrets {
    /// Resolve every secret from `provider`, stopping at the first failure
    pub async fn load(provider: &dyn SecretProvider) -> Result<Self, SecretError> {
        tracing::info!("Loading secrets");

        let secrets = Self {
            database_url: provider.get_secret(names::DATABASE_CONNECTION_STRING).await?,
            gemini_api_key: provider.get_secret(names::GEMINI_API_KEY).await?,
            smtp_key: provider.get_secret(names::SMTP_KEY).await?,
            google_client_id: provider.get_secret(names::GOOGLE_CLIENT_ID).await?,
            google_client_secret: provider.get_secret(names::GOOGLE_CLIENT_SECRET).await?,
        };

        tracing::info!("Secrets loaded");
        Ok(secrets)
    }
}

impl fmt::Debug for Secrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const REDACTED: &str = "<redacted>";
        f.debug_struct("Secrets")
            .field("database_url", &REDACTED)
            .field("gemini_api_key", &REDACTED)
            .field("smtp_key", &REDACTED)
            .field("google_client_id", &REDACTED)
            .field("google_client_secret", &REDACTED)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::collections::HashMap;

    struct MapProvider(HashMap<&'static str, &'static str>);

    #[async_trait]
    impl SecretProvider for MapProvider {
        async fn get_secret(&self, name: &str) -> Result<String, SecretError> {
            self.0
                .get(name)
                .map(|value| value.to_string())
                .ok_or_else(|| SecretError::NotFound(name.to_string()))
        }
    }

    fn full_store() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            (names::DATABASE_CONNECTION_STRING, "sqlite::memory:"),
            (names::GEMINI_API_KEY, "gemini-key"),
            (names::SMTP_KEY, "smtp-key"),
            (names::GOOGLE_CLIENT_ID, "client-id"),
            (names::GOOGLE_CLIENT_SECRET, "client-secret"),
        ])
    }

    #[tokio::test]
    async fn test_load_resolves_every_name() {
        let secrets = Secrets::load(&MapProvider(full_store())).await.unwrap();
        assert_eq!(secrets.database_url, "sqlite::memory:");
        assert_eq!(secrets.gemini_api_key, "gemini-key");
        assert_eq!(secrets.google_client_secret, "client-secret");
    }

    #[tokio::test]
    async fn test_load_fails_on_missing_secret() {
        let mut store = full_store();
        store.remove(names::GEMINI_API_KEY);

        let result = Secrets::load(&MapProvider(store)).await;
        assert_matches!(result, Err(SecretError::NotFound(name)) if name == names::GEMINI_API_KEY);
    }

    #[tokio::test]
    async fn test_debug_redacts_values() {
        let secrets = Secrets::load(&MapProvider(full_store())).await.unwrap();
        let printed = format!("{:?}", secrets);
        assert!(!printed.contains("gemini-key"));
        assert!(!printed.contains("client-secret"));
        assert!(printed.contains("<redacted>"));
    }
}
