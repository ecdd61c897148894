//! Outcome status table

/// Outcome categories reported to API clients.
///
/// Each variant maps to a fixed HTTP status code and, for every variant
/// except `Ok`, a fixed human-readable message. The table is compile-time
/// constant data and never changes at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Ok,
    BadRequest,
    Unauthorized,
    NotFound,
    UnsupportedAction,
    ValidationFailed,
    ServerError,
}

impl Status {
    /// HTTP status code for this outcome.
    pub const fn code(self) -> u16 {
        match self {
            Status::Ok => 200,
            Status::BadRequest => 400,
            Status::Unauthorized => 401,
            Status::NotFound => 404,
            Status::UnsupportedAction => 405,
            Status::ValidationFailed => 422,
            Status::ServerError => 500,
        }
    }

    /// Canonical message for this outcome. `Ok` carries no message.
    pub const fn message(self) -> Option<&'static str> {
        match self {
            Status::Ok => None,
            Status::BadRequest => Some("Bad Request"),
            Status::Unauthorized => Some("Unauthorized"),
            Status::NotFound => Some("Not Found"),
            Status::UnsupportedAction => Some("Unsupported Action"),
            Status::ValidationFailed => Some("Validation Failed"),
            Status::ServerError => Some("Internal Server Error"),
        }
    }
}
