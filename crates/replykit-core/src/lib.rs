//! # Replykit Core
//!
//! Outcome model for JSON API responses.
//!
//! This crate provides:
//! - The outcome status table (HTTP code + canonical message per outcome)
//! - Envelope constructors producing the exact JSON body for each outcome
//! - Required-parameter checks over a request's body and query maps
//!
//! It is transport-agnostic: nothing here touches HTTP types. The axum
//! binding lives in `replykit-http`.
//!
//! ## Example
//!
//! ```rust,ignore
//! use replykit_core::{Params, Reply};
//! use serde_json::json;
//!
//! let params = Params::from_query(query_map);
//! let reply = match params.require(&["username", "password"]) {
//!     Ok(()) => Reply::ok(json!({ "message": "ok" })),
//!     Err(missing) => Reply::from(missing), // 400 with the missing-parameter list
//! };
//! ```

pub mod params;
pub mod reply;
pub mod status;

// Re-exports for convenience
pub use params::*;
pub use reply::*;
pub use status::*;
