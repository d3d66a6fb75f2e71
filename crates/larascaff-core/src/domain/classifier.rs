//! Exception classification.
//!
//! Maps the closed set of framework exception categories onto the response
//! envelope, mirroring the rules the published exception handler applies.
//! A priority-ordered rule list, first match wins, no state machine; every
//! branch resolves to an [`Envelope`], never an unformatted error.

use serde_json::Value;

use super::codes;
use super::envelope::{Envelope, ResponseParts};

/// The framework exception categories the classifier understands.
#[derive(Debug, Clone, PartialEq)]
pub enum Fault {
    /// Request validation failed; carries field-level errors.
    Validation { errors: Value },
    /// Not authenticated (guards, token middleware).
    Authentication,
    /// Authenticated but not allowed.
    Authorization,
    /// Domain-level resource lookup failed (missing model).
    ModelNotFound,
    /// No route matched the request path.
    RouteNotFound,
    /// Route exists but not for this HTTP method.
    MethodNotAllowed,
    /// The underlying data store errored.
    Database { detail: String },
    /// Transport-level error carrying its own status.
    Http { status: u32, message: String },
    /// Anything else.
    Other { detail: String },
}

/// Resolve a fault to its envelope.
///
/// `debug` controls whether raw error text leaks into database and fallback
/// responses; with it off the operator-facing message stays generic.
pub fn classify(fault: Fault, debug: bool) -> Envelope {
    match fault {
        Fault::Validation { errors } => Envelope::from_parts(ResponseParts {
            code: Some(codes::UNPROCESSABLE_ENTITY),
            message: Some("Validation failed".into()),
            errors: Some(errors),
            ..Default::default()
        }),
        Fault::Authentication => Envelope::error_with(codes::UNAUTHORIZED, "Unauthenticated"),
        Fault::Authorization => Envelope::error_with(codes::FORBIDDEN, "Access denied"),
        Fault::ModelNotFound => Envelope::error_with(codes::NOT_FOUND, "Resource not found"),
        Fault::RouteNotFound => Envelope::error_with(codes::NOT_FOUND, "Route not found"),
        Fault::MethodNotAllowed => Envelope::error_with(codes::BAD_REQUEST, "Method not allowed"),
        Fault::Database { detail } => {
            let message = if debug {
                detail
            } else {
                "Database error occurred".into()
            };
            Envelope::error_with(codes::INTERNAL_SERVER_ERROR, message)
        }
        Fault::Http { status, message } => {
            let message = if message.is_empty() {
                "HTTP error occurred".into()
            } else {
                message
            };
            Envelope::error_with(status, message)
        }
        Fault::Other { detail } => {
            let message = if debug {
                detail
            } else {
                "Internal server error".into()
            };
            Envelope::error_with(codes::INTERNAL_SERVER_ERROR, message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn validation_carries_field_errors() {
        let env = classify(
            Fault::Validation {
                errors: json!({"email": ["invalid"]}),
            },
            false,
        );
        assert_eq!(env.code, 422);
        assert_eq!(env.message, "Validation failed");
        assert_eq!(env.errors.unwrap(), json!({"email": ["invalid"]}));
    }

    #[test]
    fn authentication_maps_to_401() {
        let env = classify(Fault::Authentication, false);
        assert_eq!((env.code, env.message.as_str()), (401, "Unauthenticated"));
    }

    #[test]
    fn authorization_maps_to_403() {
        let env = classify(Fault::Authorization, false);
        assert_eq!((env.code, env.message.as_str()), (403, "Access denied"));
    }

    #[test]
    fn the_two_not_found_flavors_differ_only_in_message() {
        let model = classify(Fault::ModelNotFound, false);
        let route = classify(Fault::RouteNotFound, false);
        assert_eq!(model.code, 404);
        assert_eq!(route.code, 404);
        assert_eq!(model.message, "Resource not found");
        assert_eq!(route.message, "Route not found");
    }

    #[test]
    fn method_not_allowed_maps_to_400() {
        let env = classify(Fault::MethodNotAllowed, false);
        assert_eq!((env.code, env.message.as_str()), (400, "Method not allowed"));
    }

    #[test]
    fn database_detail_only_leaks_in_debug() {
        let fault = Fault::Database {
            detail: "SQLSTATE[42S02]: table missing".into(),
        };
        let hidden = classify(fault.clone(), false);
        assert_eq!(hidden.message, "Database error occurred");
        let shown = classify(fault, true);
        assert!(shown.message.contains("SQLSTATE"));
        assert_eq!(shown.code, 500);
    }

    #[test]
    fn http_fault_keeps_its_status() {
        let env = classify(
            Fault::Http {
                status: 503,
                message: "Service unavailable".into(),
            },
            false,
        );
        assert_eq!((env.code, env.message.as_str()), (503, "Service unavailable"));
    }

    #[test]
    fn http_fault_with_empty_message_gets_generic_text() {
        let env = classify(
            Fault::Http {
                status: 410,
                message: String::new(),
            },
            false,
        );
        assert_eq!(env.message, "HTTP error occurred");
    }

    #[test]
    fn fallback_is_a_generic_500_outside_debug() {
        let env = classify(
            Fault::Other {
                detail: "boom".into(),
            },
            false,
        );
        assert_eq!((env.code, env.message.as_str()), (500, "Internal server error"));
        assert!(!env.success);
    }

    #[test]
    fn every_fault_resolves_to_a_failure_envelope() {
        let faults = [
            Fault::Validation { errors: json!({}) },
            Fault::Authentication,
            Fault::Authorization,
            Fault::ModelNotFound,
            Fault::RouteNotFound,
            Fault::MethodNotAllowed,
            Fault::Database { detail: "x".into() },
            Fault::Http { status: 502, message: "bad gateway".into() },
            Fault::Other { detail: "x".into() },
        ];
        for fault in faults {
            let env = classify(fault.clone(), false);
            assert!(!env.success, "fault {fault:?} produced a success envelope");
            assert!(env.code >= 400);
        }
    }
}
