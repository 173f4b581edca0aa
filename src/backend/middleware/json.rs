/**
 * Validated JSON Extractor
 *
 * `ValidatedJson<T>` deserializes the body like `axum::Json<T>` and then runs
 * the `validator` rules declared on `T`. Both kinds of failure become a
 * `BackendError`, so every rejection is answered with the same
 * `{"detail": "..."}` body:
 *
 * - malformed JSON → 400
 * - missing `Content-Type: application/json` → 415
 * - wrong or missing fields → 422
 * - a field rule such as `#[validate(email)]` failing → 422
 */

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::backend::error::BackendError;

/// JSON body that has passed its field validation rules
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}
