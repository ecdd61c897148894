//! Demo request handlers
//!
//! A small fake user API showing one handler per outcome. Nothing here is
//! persisted; the point is the response shapes.

use axum::extract::Path;
use axum::http::HeaderMap;
use replykit_core::Fault;
use replykit_http::{
    invalid, not_found, ok, ok_empty, server_error, unauthorized, unsupported_action, ReplyJson,
    RequestParams,
};
use serde_json::json;
use std::fmt;

/// Health check endpoint
pub async fn health() -> ReplyJson {
    ok(json!({ "status": "healthy" }))
}

/// Create a user: requires `username` and `password` in the body,
/// rejects a taken username with a validation failure.
pub async fn create_user(RequestParams(params): RequestParams) -> Result<ReplyJson, ReplyJson> {
    params.require(&["username", "password"])?;

    let username = params
        .body
        .as_ref()
        .and_then(|body| body.get("username"))
        .and_then(|value| value.as_str())
        .unwrap_or_default();

    tracing::info!(username, "creating user");

    if username == "admin" {
        return Ok(invalid("Username is already taken."));
    }

    Ok(ok(json!({ "username": username })))
}

/// Search users: requires `q` in the query string.
pub async fn search_users(RequestParams(params): RequestParams) -> Result<ReplyJson, ReplyJson> {
    params.require(&["q"])?;
    Ok(ok(json!({ "results": [] })))
}

/// Look up a user. Only "hercules" exists in this demo.
pub async fn get_user(Path(username): Path<String>) -> ReplyJson {
    if username == "hercules" {
        ok(json!({ "username": "hercules" }))
    } else {
        not_found()
    }
}

/// Deleting users is not supported by this API.
pub async fn delete_user(Path(_username): Path<String>) -> ReplyJson {
    unsupported_action()
}

/// Admin area: any Authorization header will do here.
pub async fn admin(headers: HeaderMap) -> ReplyJson {
    if headers.contains_key(axum::http::header::AUTHORIZATION) {
        ok_empty()
    } else {
        unauthorized()
    }
}

#[derive(Debug)]
struct DemoDbError;

impl fmt::Display for DemoDbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "connection refused")
    }
}

impl std::error::Error for DemoDbError {}

/// Always fails, to show the 500 envelope.
pub async fn crash() -> ReplyJson {
    let err = DemoDbError;
    tracing::error!(error = %err, "demo crash endpoint hit");
    server_error(Fault::caught(&err))
}
