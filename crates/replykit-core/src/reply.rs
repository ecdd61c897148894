//! Response envelopes
//!
//! A [`Reply`] is a fully formed outcome: a [`Status`] plus the exact JSON
//! body to write. Constructors are pure and deterministic, so the same
//! inputs always produce byte-identical bodies.

use serde::Serialize;
use serde_json::{json, Value};

use crate::params::MissingParams;
use crate::status::Status;

/// Ordered list of error descriptors for bad-request and
/// validation-failed envelopes.
///
/// The scalar-or-list flexibility of the public API lives entirely in the
/// `From` conversions: a bare value becomes a one-element list, an
/// existing list passes through with its order preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ErrorList(Vec<Value>);

impl ErrorList {
    pub fn into_inner(self) -> Vec<Value> {
        self.0
    }
}

impl From<&str> for ErrorList {
    fn from(error: &str) -> Self {
        ErrorList(vec![Value::String(error.to_string())])
    }
}

impl From<String> for ErrorList {
    fn from(error: String) -> Self {
        ErrorList(vec![Value::String(error)])
    }
}

impl From<Value> for ErrorList {
    fn from(error: Value) -> Self {
        match error {
            Value::Array(errors) => ErrorList(errors),
            other => ErrorList(vec![other]),
        }
    }
}

impl From<Vec<Value>> for ErrorList {
    fn from(errors: Vec<Value>) -> Self {
        ErrorList(errors)
    }
}

impl From<Vec<String>> for ErrorList {
    fn from(errors: Vec<String>) -> Self {
        ErrorList(errors.into_iter().map(Value::String).collect())
    }
}

impl From<MissingParams> for ErrorList {
    fn from(missing: MissingParams) -> Self {
        ErrorList(missing.0.into_iter().map(Value::String).collect())
    }
}

/// Detail embedded in a server-error envelope.
///
/// The caller declares up front whether it is reporting a structured
/// error or an opaque value; nothing here inspects types at runtime.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Fault {
    /// A trapped error: serialized as `{"message": ..., "stacktrace": ...}`
    /// with `stacktrace` omitted when absent.
    Caught {
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        stacktrace: Option<String>,
    },
    /// Any other value, embedded verbatim under the envelope's `error` field.
    Opaque(Value),
}

impl Fault {
    /// Report a structured error by its display message.
    ///
    /// Rust errors carry no stack trace by default; callers that captured
    /// one attach it with [`Fault::with_stacktrace`].
    pub fn caught(error: &(dyn std::error::Error + '_)) -> Self {
        Fault::Caught {
            message: error.to_string(),
            stacktrace: None,
        }
    }

    /// Report a structured error with a captured trace.
    pub fn with_stacktrace(message: impl Into<String>, stacktrace: impl Into<String>) -> Self {
        Fault::Caught {
            message: message.into(),
            stacktrace: Some(stacktrace.into()),
        }
    }

    /// Embed an arbitrary value as-is.
    pub fn opaque(value: impl Into<Value>) -> Self {
        Fault::Opaque(value.into())
    }
}

impl From<Value> for Fault {
    fn from(value: Value) -> Self {
        Fault::Opaque(value)
    }
}

/// A fully formed outcome: status plus JSON body.
///
/// # Envelopes
///
/// | constructor | body | status |
/// |---|---|---|
/// | `ok` | payload verbatim | 200 |
/// | `ok_empty` | `null` | 200 |
/// | `bad_request` | `{"message": "Bad Request", "errors": [...]}` | 400 |
/// | `unauthorized` | `{"message": "Unauthorized"}` | 401 |
/// | `not_found` | `{"message": "Not Found"}` | 404 |
/// | `unsupported_action` | `{"message": "Unsupported Action"}` | 405 |
/// | `invalid` | `{"message": "Validation Failed", "errors": [...]}` | 422 |
/// | `server_error` | `{"message": "Internal Server Error", "error": ...}` | 500 |
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub status: Status,
    pub body: Value,
}

impl Reply {
    /// 200 with the payload written verbatim.
    pub fn ok(payload: Value) -> Self {
        Reply {
            status: Status::Ok,
            body: payload,
        }
    }

    /// 200 with a `null` body.
    pub fn ok_empty() -> Self {
        Reply::ok(Value::Null)
    }

    /// 400 with the normalized error list.
    pub fn bad_request(errors: impl Into<ErrorList>) -> Self {
        Reply::with_errors(Status::BadRequest, errors.into())
    }

    /// 401, message only.
    pub fn unauthorized() -> Self {
        Reply::message_only(Status::Unauthorized)
    }

    /// 404, message only.
    pub fn not_found() -> Self {
        Reply::message_only(Status::NotFound)
    }

    /// 405, message only.
    pub fn unsupported_action() -> Self {
        Reply::message_only(Status::UnsupportedAction)
    }

    /// 422 with the normalized error list.
    pub fn invalid(errors: impl Into<ErrorList>) -> Self {
        Reply::with_errors(Status::ValidationFailed, errors.into())
    }

    /// 500 with the fault detail under `error`.
    pub fn server_error(fault: impl Into<Fault>) -> Self {
        let fault: Fault = fault.into();
        Reply {
            status: Status::ServerError,
            body: json!({
                "message": Status::ServerError.message(),
                "error": fault,
            }),
        }
    }

    fn message_only(status: Status) -> Self {
        Reply {
            status,
            body: json!({ "message": status.message() }),
        }
    }

    fn with_errors(status: Status, errors: ErrorList) -> Self {
        Reply {
            status,
            body: json!({
                "message": status.message(),
                "errors": errors,
            }),
        }
    }
}

impl From<MissingParams> for Reply {
    fn from(missing: MissingParams) -> Self {
        Reply::bad_request(missing)
    }
}
