//! Error codes for the Ordbok diagnostic system.
//!
//! Error codes are organized by kind:
//! - `E0xx` - Type mismatches (a value has the wrong JSON type)
//! - `E1xx` - Structural errors (missing fields, sequence sizes, tags, syntax)

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Type Mismatches (E0xx)
    // =========================================================================
    /// Expected an object.
    E001,

    /// Expected an array.
    E002,

    /// Expected a string.
    E003,

    /// Expected a number.
    ///
    /// Fraction parts also accept strings that parse as a finite number.
    E004,

    /// Expected a boolean.
    E005,

    /// Expected a non-negative integer.
    ///
    /// Used for article ids and homograph numbers.
    E006,

    // =========================================================================
    // Structural Errors (E1xx)
    // =========================================================================
    /// Missing required field.
    E100,

    /// Empty sequence.
    ///
    /// The sequence must contain at least one element.
    E101,

    /// Wrong sequence length.
    ///
    /// The sequence must contain an exact number of elements.
    E102,

    /// Unknown type tag.
    ///
    /// The `type_` field names a variant that is not allowed here.
    E103,

    /// Malformed JSON.
    ///
    /// The input text could not be decoded as JSON at all.
    E104,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Type mismatches
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E003 => "E003",
            ErrorCode::E004 => "E004",
            ErrorCode::E005 => "E005",
            ErrorCode::E006 => "E006",
            // Structural errors
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
            ErrorCode::E104 => "E104",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            // Type mismatches
            ErrorCode::E001 => "expected object",
            ErrorCode::E002 => "expected array",
            ErrorCode::E003 => "expected string",
            ErrorCode::E004 => "expected number",
            ErrorCode::E005 => "expected boolean",
            ErrorCode::E006 => "expected non-negative integer",
            // Structural errors
            ErrorCode::E100 => "missing required field",
            ErrorCode::E101 => "empty sequence",
            ErrorCode::E102 => "wrong sequence length",
            ErrorCode::E103 => "unknown type tag",
            ErrorCode::E104 => "malformed JSON",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E001.to_string(), "E001");
        assert_eq!(ErrorCode::E103.to_string(), "E103");
    }

    #[test]
    fn test_error_code_description() {
        assert_eq!(ErrorCode::E003.description(), "expected string");
        assert_eq!(ErrorCode::E101.description(), "empty sequence");
        assert_eq!(ErrorCode::E104.description(), "malformed JSON");
    }
}
