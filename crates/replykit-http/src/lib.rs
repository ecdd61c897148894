//! # Replykit HTTP
//!
//! Axum binding for replykit outcome responses.
//!
//! This crate provides:
//! - [`ReplyJson`], mapping an outcome [`Reply`](replykit_core::Reply) to
//!   an HTTP status code and JSON body
//! - Free helpers (`ok`, `bad_request`, `unauthorized`, ...) for building
//!   handler return values
//! - [`RequestParams`], an extractor capturing a request's parsed body and
//!   query for required-parameter checks
//!
//! ## Example
//!
//! ```ignore
//! use axum::{routing::post, Router};
//! use replykit_http::{ok, ReplyJson, RequestParams};
//! use serde_json::json;
//!
//! async fn signup(RequestParams(params): RequestParams) -> Result<ReplyJson, ReplyJson> {
//!     params.require(&["username", "password"])?;
//!     // ... create the account ...
//!     Ok(ok(json!({ "message": "ok" })))
//! }
//!
//! let app = Router::new().route("/signup", post(signup));
//! ```

mod error;
mod extractors;
mod response;

pub use error::ParamsRejection;
pub use extractors::RequestParams;
pub use response::{
    bad_request, invalid, not_found, ok, ok_empty, server_error, unauthorized,
    unsupported_action, ReplyJson,
};
