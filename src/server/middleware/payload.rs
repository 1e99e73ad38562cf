//! JSON request bodies reported in the same shape as field validation errors.

use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::server::error::{validation::ValidationError, AppError};

/// Key used when the body as a whole has the wrong shape.
pub const NON_FIELD_ERRORS: &str = "non_field_errors";

/// JSON body extractor used in place of `axum::Json` for request payloads.
///
/// Unreadable bodies (bad syntax, wrong content type) become a 400 `{detail}`.
/// Bodies that parse but do not fit `T` become a 400 `{field: [message]}` keyed by
/// the path of the offending value, e.g. `ingredients[0].amount`.
pub struct Payload<T>(pub T);

impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        Ok(Payload(from_value(value)?))
    }
}

fn from_value<T: DeserializeOwned>(value: Value) -> Result<T, ValidationError> {
    serde_path_to_error::deserialize(value).map_err(|err| {
        let path = err.path().to_string();
        let field = match path.as_str() {
            "." => NON_FIELD_ERRORS,
            path => path,
        };

        ValidationError::field(field, err.inner().to_string())
    })
}
