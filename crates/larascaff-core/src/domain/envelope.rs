//! The normalized response envelope.
//!
//! Every API response produced by the published controller and exception
//! handler has the same record shape:
//!
//! ```json
//! { "success": true, "message": "Success", "code": 200,
//!   "errors": ..., "data": ... }
//! ```
//!
//! `success` is always derived as `code < 400`; `message` falls back to the
//! [code table](super::codes) entry; `errors` and `data` are omitted when
//! absent. Formatting never fails.
//!
//! Payload normalization is a closed tagged variant rather than runtime type
//! inspection, so the set of supported shapes is exhaustive and checkable.

use serde::Serialize;
use serde_json::{Map, Value, json};

use super::codes;

/// The payload shapes the envelope knows how to normalize.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// A single record: flat field mapping.
    Record(Map<String, Value>),
    /// A paginated list: wrapped in `{data, pagination}`.
    Page {
        items: Vec<Value>,
        current_page: u64,
        per_page: u64,
        total: u64,
        last_page: u64,
    },
    /// A plain list, passed through as-is.
    List(Vec<Value>),
    /// Anything else, passed through untouched.
    Raw(Value),
}

impl Payload {
    /// Normalize into the JSON value placed under the envelope's `data` key.
    pub fn normalize(self) -> Value {
        match self {
            Self::Record(fields) => Value::Object(fields),
            Self::Page {
                items,
                current_page,
                per_page,
                total,
                last_page,
            } => json!({
                "data": items,
                "pagination": {
                    "current_page": current_page,
                    "per_page": per_page,
                    "total": total,
                    "last_page": last_page,
                },
            }),
            Self::List(items) => Value::Array(items),
            Self::Raw(value) => value,
        }
    }
}

/// Loosely structured input to [`Envelope::from_parts`]: every field is
/// optional, mirroring the `[data, message, code, errors]` bag the published
/// controller accepts.
#[derive(Debug, Clone, Default)]
pub struct ResponseParts {
    pub payload: Option<Payload>,
    pub message: Option<String>,
    pub code: Option<u32>,
    pub errors: Option<Value>,
}

/// The normalized response record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    pub success: bool,
    pub message: String,
    pub code: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl Envelope {
    /// Build an envelope from loosely structured parts. Never fails.
    pub fn from_parts(parts: ResponseParts) -> Self {
        let code = parts.code.unwrap_or(codes::SUCCESS);
        let message = match parts.message {
            Some(m) if !m.is_empty() => m,
            _ => codes::message(code).to_string(),
        };

        Self {
            success: code < codes::BAD_REQUEST,
            message,
            code,
            errors: parts.errors,
            data: parts.payload.map(Payload::normalize),
        }
    }

    /// Shorthand for a bare error envelope with the table message.
    pub fn error(code: u32) -> Self {
        Self::from_parts(ResponseParts {
            code: Some(code),
            ..Default::default()
        })
    }

    /// Shorthand for an error envelope with an explicit message.
    pub fn error_with(code: u32, message: impl Into<String>) -> Self {
        Self::from_parts(ResponseParts {
            code: Some(code),
            message: Some(message.into()),
            ..Default::default()
        })
    }

    /// HTTP transport status for this envelope.
    ///
    /// The body's `code` field keeps custom logic codes (1000+) verbatim, but
    /// they are not valid HTTP statuses; those travel as 400.
    pub fn http_status(&self) -> u16 {
        if (100..=599).contains(&self.code) {
            self.code as u16
        } else {
            codes::BAD_REQUEST as u16
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_is_derived_from_code_for_all_table_codes() {
        for code in codes::ALL {
            let env = Envelope::error(code);
            assert_eq!(env.success, code < 400, "code {code}");
        }
    }

    #[test]
    fn defaults_are_success_200() {
        let env = Envelope::from_parts(ResponseParts::default());
        assert!(env.success);
        assert_eq!(env.code, 200);
        assert_eq!(env.message, "Success");
        assert!(env.data.is_none());
        assert!(env.errors.is_none());
    }

    #[test]
    fn bare_401_uses_table_message() {
        // {code: 401} with no message -> {success: false, message: "Unauthorized", code: 401}
        let env = Envelope::error(codes::UNAUTHORIZED);
        assert!(!env.success);
        assert_eq!(env.message, "Unauthorized");
        assert_eq!(env.code, 401);
    }

    #[test]
    fn explicit_message_wins_over_table() {
        let env = Envelope::error_with(codes::NOT_FOUND, "Order not found");
        assert_eq!(env.message, "Order not found");
    }

    #[test]
    fn empty_message_falls_back_to_table() {
        let env = Envelope::error_with(codes::NOT_FOUND, "");
        assert_eq!(env.message, "Resource not found");
    }

    #[test]
    fn unknown_code_uses_fallback_message() {
        let env = Envelope::error(777);
        assert_eq!(env.message, "Unknown error");
        assert!(!env.success);
    }

    #[test]
    fn paginated_payload_is_normalized() {
        let env = Envelope::from_parts(ResponseParts {
            payload: Some(Payload::Page {
                items: vec![json!("a"), json!("b")],
                current_page: 1,
                per_page: 2,
                total: 5,
                last_page: 3,
            }),
            ..Default::default()
        });
        assert_eq!(
            env.data.unwrap(),
            json!({
                "data": ["a", "b"],
                "pagination": {"current_page": 1, "per_page": 2, "total": 5, "last_page": 3},
            })
        );
    }

    #[test]
    fn record_payload_is_a_flat_mapping() {
        let mut fields = Map::new();
        fields.insert("id".into(), json!(7));
        let env = Envelope::from_parts(ResponseParts {
            payload: Some(Payload::Record(fields)),
            ..Default::default()
        });
        assert_eq!(env.data.unwrap(), json!({"id": 7}));
    }

    #[test]
    fn list_and_raw_pass_through() {
        assert_eq!(
            Payload::List(vec![json!(1), json!(2)]).normalize(),
            json!([1, 2])
        );
        assert_eq!(Payload::Raw(json!("plain")).normalize(), json!("plain"));
    }

    #[test]
    fn absent_fields_are_omitted_from_json() {
        let text = serde_json::to_string(&Envelope::error(codes::FORBIDDEN)).unwrap();
        assert!(!text.contains("\"data\""));
        assert!(!text.contains("\"errors\""));
        assert!(text.contains("\"success\":false"));
    }

    #[test]
    fn present_errors_are_serialized() {
        let env = Envelope::from_parts(ResponseParts {
            code: Some(codes::UNPROCESSABLE_ENTITY),
            errors: Some(json!({"name": ["required"]})),
            ..Default::default()
        });
        let text = serde_json::to_string(&env).unwrap();
        assert!(text.contains("\"errors\""));
    }

    #[test]
    fn http_status_clamps_custom_codes() {
        assert_eq!(Envelope::error(codes::VALIDATION_ERROR).http_status(), 400);
        assert_eq!(Envelope::error(codes::NOT_FOUND).http_status(), 404);
        assert_eq!(Envelope::error(codes::SUCCESS).http_status(), 200);
    }
}
