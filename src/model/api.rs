use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body for non-field errors.
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub detail: String,
}
