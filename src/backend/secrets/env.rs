//! Environment-variable secret provider.
//!
//! Maps a secret name to a variable by upper-casing it and replacing `-`
//! with `_`, so `UP2D8-GEMINI-API-Key` is read from `UP2D8_GEMINI_API_KEY`.

use async_trait::async_trait;

use super::{SecretError, SecretProvider};

#[derive(Debug, Clone, Default)]
pub struct EnvSecretProvider;

impl EnvSecretProvider {
    pub fn new() -> Self {
        Self
    }

    /// Variable name holding the secret called `name`
    pub fn variable_name(name: &str) -> String {
        name.to_ascii_uppercase().replace('-', "_")
    }
}

#[async_trait]
impl SecretProvider for EnvSecretProvider {
    async fn get_secret(&self, name: &str) -> Result<String, SecretError> {
        let variable = Self::variable_name(name);
        std::env::var(&variable)
            .ok()
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                tracing::warn!(secret = name, %variable, "secret not set in environment");
                SecretError::NotFound(name.to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::secrets::names;
    use assert_matches::assert_matches;
    use serial_test::serial;

    #[test]
    fn test_variable_name_mapping() {
        assert_eq!(
            EnvSecretProvider::variable_name(names::GEMINI_API_KEY),
            "UP2D8_GEMINI_API_KEY"
        );
        assert_eq!(
            EnvSecretProvider::variable_name(names::DATABASE_CONNECTION_STRING),
            "COSMOS_DB_CONNECTION_STRING_UP2D8"
        );
    }

    #[tokio::test]
    #[serial]
    async fn test_reads_and_misses() {
        std::env::set_var("GOOGLE_CLIENT_ID", "client-id");
        std::env::remove_var("UP2D8_SMTP_KEY");

        let provider = EnvSecretProvider::new();
        let found = provider.get_secret(names::GOOGLE_CLIENT_ID).await;
        let missing = provider.get_secret(names::SMTP_KEY).await;
        std::env::remove_var("GOOGLE_CLIENT_ID");

        assert_eq!(found.unwrap(), "client-id");
        assert_matches!(missing, Err(SecretError::NotFound(name)) if name == names::SMTP_KEY);
    }
}
