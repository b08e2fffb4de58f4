//! Error and diagnostic system for the Ordbok validator.
//!
//! This module provides an error handling system with:
//! - Error codes for documentation and searchability
//! - A JSON path locating each mismatch inside the input document
//! - Diagnostic collector for accumulating multiple errors
//!
//! # Overview
//!
//! The error system is built around the [`Diagnostic`] type, which represents
//! a single structural mismatch with an error code, the path of the offending
//! value, and optional help text. All diagnostics of one validation run are
//! wrapped in [`ValidationError`].
//!
//! # Example
//!
//! ```
//! # use ordbok_validate::error::{Diagnostic, ErrorCode};
//! # use ordbok_validate::JsonPath;
//!
//! let path = JsonPath::root().field("lemmas").index(0).field("hgno");
//!
//! let diag = Diagnostic::error("expected non-negative integer, found string")
//!     .with_code(ErrorCode::E006)
//!     .at(path)
//!     .with_help("homograph numbers are written as plain numbers");
//!
//! assert_eq!(diag.path().to_string(), "lemmas[0].hgno");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod validation_error;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use validation_error::ValidationError;
