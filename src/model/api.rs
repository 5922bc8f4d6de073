use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error body returned for every non-validation failure.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    /// HTTP status code as a string, e.g. `"404"`.
    pub code: String,
    pub message: String,
}

/// Error body returned when request fields fail validation.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorDto {
    /// Always `"400"`.
    pub code: String,
    /// Field name to the first validation message for that field.
    pub errors: BTreeMap<String, String>,
}
