//! Response helpers mapping outcomes to HTTP responses

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use replykit_core::{ErrorList, Fault, MissingParams, Reply, Status};
use serde_json::Value;

/// Wrapper for replies that maps outcome status to HTTP status codes
///
/// # Status Code Mapping
///
/// - `Ok` -> 200 OK
/// - `BadRequest` -> 400 Bad Request
/// - `Unauthorized` -> 401 Unauthorized
/// - `NotFound` -> 404 Not Found
/// - `UnsupportedAction` -> 405 Method Not Allowed
/// - `ValidationFailed` -> 422 Unprocessable Entity
/// - `ServerError` -> 500 Internal Server Error
///
/// The JSON body is written through [`axum::Json`], which sets the
/// `Content-Type: application/json` header. Each reply is written exactly
/// once.
#[derive(Debug)]
pub struct ReplyJson(pub Reply);

impl IntoResponse for ReplyJson {
    fn into_response(self) -> Response {
        let status_code = match self.0.status {
            Status::Ok => StatusCode::OK,
            Status::BadRequest => StatusCode::BAD_REQUEST,
            Status::Unauthorized => StatusCode::UNAUTHORIZED,
            Status::NotFound => StatusCode::NOT_FOUND,
            Status::UnsupportedAction => StatusCode::METHOD_NOT_ALLOWED,
            Status::ValidationFailed => StatusCode::UNPROCESSABLE_ENTITY,
            Status::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status_code, Json(self.0.body)).into_response()
    }
}

impl From<Reply> for ReplyJson {
    fn from(reply: Reply) -> Self {
        ReplyJson(reply)
    }
}

/// A failed parameter check renders as the 400 bad-request response, so
/// handlers returning `Result<ReplyJson, ReplyJson>` can use `?` on
/// [`Params::require`](replykit_core::Params::require).
impl From<MissingParams> for ReplyJson {
    fn from(missing: MissingParams) -> Self {
        ReplyJson(Reply::from(missing))
    }
}

/// 200 with the payload written verbatim.
pub fn ok(payload: Value) -> ReplyJson {
    ReplyJson(Reply::ok(payload))
}

/// 200 with a `null` body.
pub fn ok_empty() -> ReplyJson {
    ReplyJson(Reply::ok_empty())
}

/// 400 with `{"message": "Bad Request", "errors": [...]}`.
pub fn bad_request(errors: impl Into<ErrorList>) -> ReplyJson {
    ReplyJson(Reply::bad_request(errors))
}

/// 401 with `{"message": "Unauthorized"}`.
pub fn unauthorized() -> ReplyJson {
    ReplyJson(Reply::unauthorized())
}

/// 404 with `{"message": "Not Found"}`.
pub fn not_found() -> ReplyJson {
    ReplyJson(Reply::not_found())
}

/// 405 with `{"message": "Unsupported Action"}`.
pub fn unsupported_action() -> ReplyJson {
    ReplyJson(Reply::unsupported_action())
}

/// 422 with `{"message": "Validation Failed", "errors": [...]}`.
pub fn invalid(errors: impl Into<ErrorList>) -> ReplyJson {
    ReplyJson(Reply::invalid(errors))
}

/// 500 with `{"message": "Internal Server Error", "error": ...}`.
pub fn server_error(fault: impl Into<Fault>) -> ReplyJson {
    ReplyJson(Reply::server_error(fault))
}
