/**
 * Server Initialization
 *
 * Builds everything the request handlers share and wires it into the
 * router.
 *
 * # Initialization Process
 *
 * 1. Pick the secret provider (Key Vault when `KEY_VAULT_URI` is set,
 *    environment variables otherwise) and load every secret
 * 2. Connect the database pool (failure leaves it unavailable)
 * 3. Create the Gemini text generator
 * 4. Assemble `AppState` and create the router
 *
 * A secret-store failure aborts startup; a database failure does not.
 */

use std::sync::Arc;

use axum::Router;

use crate::backend::ai::{GeminiGenerator, TextGenerator};
use crate::backend::error::BackendError;
use crate::backend::routes::router::create_router;
use crate::backend::secrets::{EnvSecretProvider, KeyVaultClient, SecretProvider, Secrets};
use crate::backend::server::config::load_database;
use crate::backend::server::state::AppState;
use crate::shared::AppConfig;

/// Create and configure the Axum application
///
/// # Errors
///
/// Returns [`BackendError::Secret`] if the secret store cannot be reached or
/// is missing a secret.
pub async fn create_app(config: AppConfig) -> Result<Router<()>, BackendError> {
    tracing::info!("Initializing UP2D8 backend server");

    // Step 1: Secrets
    let provider: Box<dyn SecretProvider> = match &config.key_vault_uri {
        Some(vault_uri) => {
            tracing::info!(%vault_uri, "Reading secrets from Key Vault");
            Box::new(KeyVaultClient::from_env(vault_uri.as_str())?)
        }
        None => {
            tracing::warn!("KEY_VAULT_URI not set. Reading secrets from the environment.");
            Box::new(EnvSecretProvider::new())
        }
    };
    let secrets = Secrets::load(provider.as_ref()).await?;

    // Step 2: Database
    let db_pool = load_database(&secrets.database_url, config.database_max_connections).await;

    // Step 3: Text generator
    let generator: Arc<dyn TextGenerator> = Arc::new(GeminiGenerator::new(
        secrets.gemini_api_key.as_str(),
        config.gemini_model.as_str(),
    ));
    tracing::info!(model = %config.gemini_model, "Text generator ready");

    // Step 4: State and router
    let app_state = AppState::new(db_pool, generator, config);
    let app = create_router(app_state);

    tracing::info!("Router configured");
    Ok(app)
}
