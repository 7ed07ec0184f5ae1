//! Error codes for the Overruled backend API.
//!
//! All error codes used in HTTP responses live here; never pass ad-hoc
//! strings as error codes. Codes are SCREAMING_SNAKE_CASE and map 1:1 to
//! the strings that appear in ProblemDetails bodies.

use core::fmt;

/// Centralized error codes for the Overruled backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request validation
    /// Body failed to parse as JSON / wrong field types
    BadRequest,
    /// Body parsed but violates a semantic invariant (e.g. empty case field)
    ValidationError,

    // Resource not found
    /// General not found error
    NotFound,

    // Business logic
    /// Model-oracle call or reply parsing failed
    GenerationFailed,
    /// No model oracle configured for this process
    OracleUnavailable,

    // System errors
    /// Configuration error (missing/invalid environment)
    ConfigError,
    /// Internal server error
    InternalError,
}

impl ErrorCode {
    /// Canonical wire string for this code.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::GenerationFailed => "GENERATION_FAILED",
            ErrorCode::OracleUnavailable => "ORACLE_UNAVAILABLE",
            ErrorCode::ConfigError => "CONFIG_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    const ALL: &[ErrorCode] = &[
        ErrorCode::BadRequest,
        ErrorCode::ValidationError,
        ErrorCode::NotFound,
        ErrorCode::GenerationFailed,
        ErrorCode::OracleUnavailable,
        ErrorCode::ConfigError,
        ErrorCode::InternalError,
    ];

    #[test]
    fn wire_strings_are_unique_and_screaming_snake() {
        let mut seen = HashSet::new();
        for code in ALL {
            let s = code.as_str();
            assert!(seen.insert(s), "duplicate error code string: {s}");
            assert!(
                s.chars().all(|c| c.is_ascii_uppercase() || c == '_'),
                "{s} is not SCREAMING_SNAKE_CASE"
            );
        }
    }

    #[test]
    fn display_matches_as_str() {
        for code in ALL {
            assert_eq!(code.to_string(), code.as_str());
        }
    }
}
