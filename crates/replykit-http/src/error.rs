//! Extractor rejections

use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::response::bad_request;

/// Rejections produced while capturing request parameters
///
/// Both render as a 400 bad-request envelope with the rejection message
/// as the single error entry.
#[derive(Debug, Error)]
pub enum ParamsRejection {
    #[error("Failed to parse request body: {0}")]
    ParseError(String),

    #[error("Request body must be a JSON object")]
    NonObjectBody,

    #[error("Failed to parse query string: {0}")]
    QueryError(String),
}

impl IntoResponse for ParamsRejection {
    fn into_response(self) -> Response {
        bad_request(self.to_string()).into_response()
    }
}
