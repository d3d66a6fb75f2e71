//! The API code table.
//!
//! A fixed, immutable mapping of numeric result codes to default messages and
//! canonical short names. Codes below 1000 double as HTTP status codes;
//! 1000+ are custom logic codes that never travel as a transport status.
//!
//! Lookups never fail: unknown codes fall back to a generic entry.

// Success codes (2xx)
pub const SUCCESS: u32 = 200;

// Client error codes (4xx)
pub const BAD_REQUEST: u32 = 400;
pub const UNAUTHORIZED: u32 = 401;
pub const FORBIDDEN: u32 = 403;
pub const NOT_FOUND: u32 = 404;
pub const UNPROCESSABLE_ENTITY: u32 = 422;

// Server error codes (5xx)
pub const INTERNAL_SERVER_ERROR: u32 = 500;

// Custom logic codes (1000+)
pub const VALIDATION_ERROR: u32 = 1000;

/// Default human-readable message for a code.
pub fn message(code: u32) -> &'static str {
    match code {
        SUCCESS => "Success",
        BAD_REQUEST => "Bad request",
        UNAUTHORIZED => "Unauthorized",
        FORBIDDEN => "Forbidden",
        NOT_FOUND => "Resource not found",
        UNPROCESSABLE_ENTITY => "Validation failed",
        INTERNAL_SERVER_ERROR => "Internal server error",
        VALIDATION_ERROR => "Validation error",
        _ => "Unknown error",
    }
}

/// Canonical short name for a code.
pub fn readable(code: u32) -> &'static str {
    match code {
        SUCCESS => "SUCCESS",
        BAD_REQUEST => "BAD_REQUEST",
        UNAUTHORIZED => "UNAUTHORIZED",
        FORBIDDEN => "FORBIDDEN",
        NOT_FOUND => "NOT_FOUND",
        UNPROCESSABLE_ENTITY => "VALIDATION_ERROR",
        INTERNAL_SERVER_ERROR => "INTERNAL_SERVER_ERROR",
        VALIDATION_ERROR => "VALIDATION_ERROR",
        _ => "UNKNOWN_ERROR",
    }
}

/// All codes present in the table, for exhaustive property checks.
pub const ALL: [u32; 8] = [
    SUCCESS,
    BAD_REQUEST,
    UNAUTHORIZED,
    FORBIDDEN,
    NOT_FOUND,
    UNPROCESSABLE_ENTITY,
    INTERNAL_SERVER_ERROR,
    VALIDATION_ERROR,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_code_has_a_specific_message() {
        for code in ALL {
            assert_ne!(message(code), "Unknown error", "code {code}");
            assert_ne!(readable(code), "UNKNOWN_ERROR", "code {code}");
        }
    }

    #[test]
    fn unknown_codes_fall_back_without_panicking() {
        for code in [0, 123, 418, 999, 5000, u32::MAX] {
            assert_eq!(message(code), "Unknown error");
            assert_eq!(readable(code), "UNKNOWN_ERROR");
        }
    }

    #[test]
    fn unauthorized_message_matches_table() {
        assert_eq!(message(UNAUTHORIZED), "Unauthorized");
    }

    #[test]
    fn custom_validation_code_shares_readable_with_422() {
        assert_eq!(readable(VALIDATION_ERROR), readable(UNPROCESSABLE_ENTITY));
    }
}
