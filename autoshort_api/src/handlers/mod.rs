use serde::de::DeserializeOwned;

use crate::error::{ApiError, ApiResult};

pub mod generate;
pub mod placeholder;
pub mod post;
pub mod youtube;

/// Treats empty strings the same as absent fields.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Bodies are parsed as JSON whatever `Content-Type` the client sent.
/// A body that is not valid JSON for `T` is a server error.
pub(crate) fn parse_body<T: DeserializeOwned>(body: &[u8]) -> ApiResult<T> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::warn!("failed to parse request body: {}", e);
        ApiError::internal(e.to_string())
    })
}
