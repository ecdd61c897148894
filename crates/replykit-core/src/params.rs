//! Required-parameter checks
//!
//! This module provides the precondition check handlers run before their
//! main logic: given the request's parsed body and query maps, verify that
//! every required parameter name is present.

use serde_json::{Map, Value};
use thiserror::Error;

/// A request's parameter sources.
///
/// Source selection happens once per check, not per parameter: when a
/// parsed body is present — even an empty one — only the body is
/// consulted. The query map is used solely for body-less requests. The
/// two sources are never merged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    /// Parsed request body, when the request carried one.
    pub body: Option<Map<String, Value>>,
    /// Parsed query-string parameters.
    pub query: Map<String, Value>,
}

impl Params {
    /// Parameters for a request with a parsed body and no query of interest.
    pub fn from_body(body: Map<String, Value>) -> Self {
        Params {
            body: Some(body),
            query: Map::new(),
        }
    }

    /// Parameters for a body-less request.
    pub fn from_query(query: Map<String, Value>) -> Self {
        Params { body: None, query }
    }

    fn source(&self) -> &Map<String, Value> {
        self.body.as_ref().unwrap_or(&self.query)
    }

    /// User-facing messages for every required name absent from the
    /// selected source, in the order the names were given.
    pub fn missing<S: AsRef<str>>(&self, names: &[S]) -> Vec<String> {
        let source = self.source();
        names
            .iter()
            .map(AsRef::as_ref)
            .filter(|name| !source.contains_key(*name))
            .map(|name| format!("Missing required parameter: {name}"))
            .collect()
    }

    /// Check that every required name is present.
    ///
    /// # Errors
    ///
    /// Returns [`MissingParams`] listing each absent name. The error
    /// converts into a 400 bad-request [`Reply`](crate::Reply), so
    /// handlers can short-circuit with `?`.
    pub fn require<S: AsRef<str>>(&self, names: &[S]) -> Result<(), MissingParams> {
        let missing = self.missing(names);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(MissingParams(missing))
        }
    }
}

/// Rejection produced when required parameters are absent.
///
/// Holds one `"Missing required parameter: <name>"` message per absent
/// name, in the order the names were required.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .0.join(", "))]
pub struct MissingParams(pub Vec<String>);
