//! Envelope shape tests for replykit-core

use replykit_core::{ErrorList, Fault, Reply, Status};
use serde_json::json;

mod success {
    use super::*;

    #[test]
    fn test_ok_passes_payload_through_verbatim() {
        let payload = json!({ "message": "ok", "count": 3 });
        let reply = Reply::ok(payload.clone());

        assert_eq!(reply.status, Status::Ok);
        assert_eq!(reply.body, payload);
    }

    #[test]
    fn test_ok_empty_has_null_body() {
        let reply = Reply::ok_empty();

        assert_eq!(reply.status, Status::Ok);
        assert_eq!(reply.body, json!(null));
    }

    #[test]
    fn test_ok_does_not_wrap_scalars() {
        let reply = Reply::ok(json!("plain string"));
        assert_eq!(reply.body, json!("plain string"));
    }
}

mod error_lists {
    use super::*;

    #[test]
    fn test_bad_request_wraps_single_error() {
        let reply = Reply::bad_request("Missing required parameter: password");

        assert_eq!(reply.status, Status::BadRequest);
        assert_eq!(
            reply.body,
            json!({
                "message": "Bad Request",
                "errors": ["Missing required parameter: password"],
            })
        );
    }

    #[test]
    fn test_bad_request_passes_list_through_in_order() {
        let errors = vec!["first".to_string(), "second".to_string(), "third".to_string()];
        let reply = Reply::bad_request(errors);

        assert_eq!(
            reply.body,
            json!({
                "message": "Bad Request",
                "errors": ["first", "second", "third"],
            })
        );
    }

    #[test]
    fn test_invalid_wraps_single_error() {
        let reply = Reply::invalid("Username is already taken.");

        assert_eq!(reply.status, Status::ValidationFailed);
        assert_eq!(
            reply.body,
            json!({
                "message": "Validation Failed",
                "errors": ["Username is already taken."],
            })
        );
    }

    #[test]
    fn test_json_array_value_is_treated_as_a_list() {
        let reply = Reply::invalid(json!(["a", "b"]));

        assert_eq!(reply.body["errors"], json!(["a", "b"]));
    }

    #[test]
    fn test_structured_error_values_survive() {
        let reply = Reply::invalid(json!({ "field": "email", "reason": "malformed" }));

        assert_eq!(
            reply.body["errors"],
            json!([{ "field": "email", "reason": "malformed" }])
        );
    }

    #[test]
    fn test_error_list_from_value_preserves_order() {
        let list = ErrorList::from(json!(["z", "a", "m"]));
        assert_eq!(list.into_inner(), vec![json!("z"), json!("a"), json!("m")]);
    }
}

mod message_only {
    use super::*;

    #[test]
    fn test_unauthorized() {
        let reply = Reply::unauthorized();

        assert_eq!(reply.status, Status::Unauthorized);
        assert_eq!(reply.body, json!({ "message": "Unauthorized" }));
    }

    #[test]
    fn test_not_found() {
        let reply = Reply::not_found();

        assert_eq!(reply.status, Status::NotFound);
        assert_eq!(reply.body, json!({ "message": "Not Found" }));
    }

    #[test]
    fn test_unsupported_action() {
        let reply = Reply::unsupported_action();

        assert_eq!(reply.status, Status::UnsupportedAction);
        assert_eq!(reply.body, json!({ "message": "Unsupported Action" }));
    }
}

mod server_errors {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct DbError;

    impl fmt::Display for DbError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "Database error")
        }
    }

    impl std::error::Error for DbError {}

    #[test]
    fn test_caught_error_with_stacktrace() {
        let reply = Reply::server_error(Fault::with_stacktrace("Database error", "..."));

        assert_eq!(reply.status, Status::ServerError);
        assert_eq!(
            reply.body,
            json!({
                "message": "Internal Server Error",
                "error": { "message": "Database error", "stacktrace": "..." },
            })
        );
    }

    #[test]
    fn test_caught_error_omits_absent_stacktrace() {
        let reply = Reply::server_error(Fault::caught(&DbError));

        assert_eq!(
            reply.body,
            json!({
                "message": "Internal Server Error",
                "error": { "message": "Database error" },
            })
        );
    }

    #[test]
    fn test_opaque_value_is_embedded_verbatim() {
        let reply = Reply::server_error(json!({ "code": "ECONNRESET" }));

        assert_eq!(
            reply.body,
            json!({
                "message": "Internal Server Error",
                "error": { "code": "ECONNRESET" },
            })
        );
    }

    #[test]
    fn test_opaque_string() {
        let reply = Reply::server_error(Fault::opaque("disk full"));

        assert_eq!(reply.body["error"], json!("disk full"));
    }
}

mod determinism {
    use super::*;

    #[test]
    fn test_identical_inputs_produce_identical_bodies() {
        let a = Reply::invalid(vec!["one".to_string(), "two".to_string()]);
        let b = Reply::invalid(vec!["one".to_string(), "two".to_string()]);

        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_vec(&a.body).unwrap(),
            serde_json::to_vec(&b.body).unwrap()
        );
    }
}
