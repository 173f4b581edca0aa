/**
 * Azure Key Vault Provider
 *
 * Reads secrets through the Key Vault REST API:
 *
 * ```text
 * GET {vault}/secrets/{name}?api-version=7.4
 * Authorization: Bearer <token>
 *
 * 200 {"value": "...", "id": "..."}
 * ```
 *
 * # Credential Chain
 *
 * The bearer token comes from the first credential the environment provides:
 *
 * 1. `AZURE_ACCESS_TOKEN` - a pre-issued token
 * 2. `AZURE_TENANT_ID`, `AZURE_CLIENT_ID`, `AZURE_CLIENT_SECRET` - service
 *    principal, OAuth2 client-credentials grant against
 *    `AZURE_AUTHORITY_HOST` (default `https://login.microsoftonline.com`)
 * 3. `IDENTITY_ENDPOINT`, `IDENTITY_HEADER` - App Service managed identity
 *
 * A token is requested for every secret read; reads only happen at startup.
 */

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;

use super::{SecretError, SecretProvider};

/// Key Vault REST API version
pub const API_VERSION: &str = "7.4";

/// OAuth2 scope / resource identifying Key Vault
const VAULT_SCOPE: &str = "https://vault.azure.net/.default";
const VAULT_RESOURCE: &str = "https://vault.azure.net";

const DEFAULT_AUTHORITY_HOST: &str = "https://login.microsoftonline.com";
const MANAGED_IDENTITY_API_VERSION: &str = "2019-08-01";

/// How the client obtains a bearer token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    /// A token issued out of band
    AccessToken(String),
    /// Service principal with a client secret
    ClientSecret {
        authority_host: String,
        tenant_id: String,
        client_id: String,
        client_secret: String,
    },
    /// App Service / Functions managed identity endpoint
    ManagedIdentity { endpoint: String, header: String },
}

impl Credential {
    /// Pick the first credential available in the environment
    ///
    /// # Errors
    ///
    /// `SecretError::Authentication` when none of the variable sets is
    /// complete.
    pub fn from_env() -> Result<Self, SecretError> {
        let var = |key: &str| std::env::var(key).ok().filter(|v| !v.is_empty());

        if let Some(token) = var("AZURE_ACCESS_TOKEN") {
            return Ok(Self::AccessToken(token));
        }

        if let (Some(tenant_id), Some(client_id), Some(client_secret)) = (
            var("AZURE_TENANT_ID"),
            var("AZURE_CLIENT_ID"),
            var("AZURE_CLIENT_SECRET"),
        ) {
            let authority_host = var("AZURE_AUTHORITY_HOST")
                .unwrap_or_else(|| DEFAULT_AUTHORITY_HOST.to_string());
            return Ok(Self::ClientSecret {
                authority_host: authority_host.trim_end_matches('/').to_string(),
                tenant_id,
                client_id,
                client_secret,
            });
        }

        if let (Some(endpoint), Some(header)) = (var("IDENTITY_ENDPOINT"), var("IDENTITY_HEADER")) {
            return Ok(Self::ManagedIdentity { endpoint, header });
        }

        Err(SecretError::Authentication(
            "no Azure credential found in the environment".to_string(),
        ))
    }
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Deserialize)]
struct SecretBundle {
    value: String,
}

/// Key Vault client
#[derive(Debug, Clone)]
pub struct KeyVaultClient {
    vault_uri: String,
    credential: Credential,
    http: reqwest::Client,
}

impl KeyVaultClient {
    /// Create a client for the vault at `vault_uri`
    pub fn new(vault_uri: impl Into<String>, credential: Credential) -> Self {
        let vault_uri: String = vault_uri.into();
        Self {
            vault_uri: vault_uri.trim_end_matches('/').to_string(),
            credential,
            http: reqwest::Client::new(),
        }
    }

    /// Create a client using the credential chain from the environment
    pub fn from_env(vault_uri: impl Into<String>) -> Result<Self, SecretError> {
        Ok(Self::new(vault_uri, Credential::from_env()?))
    }

    pub fn vault_uri(&self) -> &str {
        &self.vault_uri
    }

    async fn access_token(&self) -> Result<String, SecretError> {
        let response = match &self.credential {
            Credential::AccessToken(token) => return Ok(token.clone()),
            Credential::ClientSecret {
                authority_host,
                tenant_id,
                client_id,
                client_secret,
            } => {
                let url = format!("{}/{}/oauth2/v2.0/token", authority_host, tenant_id);
                self.http
                    .post(url)
                    .form(&[
                        ("grant_type", "client_credentials"),
                        ("client_id", client_id.as_str()),
                        ("client_secret", client_secret.as_str()),
                        ("scope", VAULT_SCOPE),
                    ])
                    .send()
                    .await?
            }
            Credential::ManagedIdentity { endpoint, header } => {
                self.http
                    .get(endpoint)
                    .query(&[
                        ("resource", VAULT_RESOURCE),
                        ("api-version", MANAGED_IDENTITY_API_VERSION),
                    ])
                    .header("X-IDENTITY-HEADER", header)
                    .send()
                    .await?
            }
        };

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%status, "token request rejected");
            return Err(SecretError::Authentication(format!(
                "token endpoint returned {}",
                status
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| SecretError::Malformed(e.to_string()))?;
        Ok(token.access_token)
    }
}

#[async_trait]
impl SecretProvider for KeyVaultClient {
    async fn get_secret(&self, name: &str) -> Result<String, SecretError> {
        let token = self.access_token().await?;
        let url = format!("{}/secrets/{}", self.vault_uri, name);

        tracing::debug!(secret = name, "fetching secret from Key Vault");
        let response = self
            .http
            .get(url)
            .query(&[("api-version", API_VERSION)])
            .bearer_auth(token)
            .send()
            .await?;

        match response.status() {
            status if status.is_success() => {
                let bundle: SecretBundle = response
                    .json()
                    .await
                    .map_err(|e| SecretError::Malformed(e.to_string()))?;
                Ok(bundle.value)
            }
            StatusCode::NOT_FOUND => Err(SecretError::NotFound(name.to_string())),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(SecretError::Authentication(
                format!("Key Vault refused access to {}", name),
            )),
            status => Err(SecretError::Malformed(format!(
                "Key Vault returned {} for {}",
                status, name
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serial_test::serial;

    const VARS: [&str; 7] = [
        "AZURE_ACCESS_TOKEN",
        "AZURE_TENANT_ID",
        "AZURE_CLIENT_ID",
        "AZURE_CLIENT_SECRET",
        "AZURE_AUTHORITY_HOST",
        "IDENTITY_ENDPOINT",
        "IDENTITY_HEADER",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_access_token_wins() {
        clear_env();
        std::env::set_var("AZURE_ACCESS_TOKEN", "token");
        std::env::set_var("AZURE_TENANT_ID", "tenant");

        let credential = Credential::from_env();
        clear_env();

        assert_eq!(credential.unwrap(), Credential::AccessToken("token".to_string()));
    }

    #[test]
    #[serial]
    fn test_client_secret_needs_all_three() {
        clear_env();
        std::env::set_var("AZURE_TENANT_ID", "tenant");
        std::env::set_var("AZURE_CLIENT_ID", "client");
        assert_matches!(Credential::from_env(), Err(SecretError::Authentication(_)));

        std::env::set_var("AZURE_CLIENT_SECRET", "secret");
        let credential = Credential::from_env();
        clear_env();

        assert_eq!(
            credential.unwrap(),
            Credential::ClientSecret {
                authority_host: DEFAULT_AUTHORITY_HOST.to_string(),
                tenant_id: "tenant".to_string(),
                client_id: "client".to_string(),
                client_secret: "secret".to_string(),
            }
        );
    }

    #[test]
    #[serial]
    fn test_managed_identity_fallback() {
        clear_env();
        std::env::set_var("IDENTITY_ENDPOINT", "http://127.0.0.1:41741/msi/token");
        std::env::set_var("IDENTITY_HEADER", "abc");

        let credential = Credential::from_env();
        clear_env();

        assert_matches!(credential, Ok(Credential::ManagedIdentity { header, .. }) if header == "abc");
    }

    #[test]
    fn test_vault_uri_is_normalised() {
        let client = KeyVaultClient::new(
            "https://up2d8.vault.azure.net/",
            Credential::AccessToken("t".to_string()),
        );
        assert_eq!(client.vault_uri(), "https://up2d8.vault.azure.net");
    }
}
