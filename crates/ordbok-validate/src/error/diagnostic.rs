//! The core diagnostic type for the Ordbok validator.
//!
//! A [`Diagnostic`] represents a single structural mismatch with an optional
//! error code, the JSON path of the offending value, and help text.

use std::fmt;

use crate::{error::ErrorCode, path::JsonPath};

/// A validation failure located inside the input document.
///
/// # Example
///
/// ```text
/// error[E003]: expected string, found number
///   at lemmas[0].lemma
///   = help: lemma text must be a JSON string
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    code: Option<ErrorCode>,
    message: String,
    path: JsonPath,
    help: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic located at the document root.
    ///
    /// # Example
    ///
    /// ```
    /// # use ordbok_validate::error::{Diagnostic, ErrorCode};
    /// # use ordbok_validate::JsonPath;
    ///
    /// let diag = Diagnostic::error("missing required field `body`")
    ///     .with_code(ErrorCode::E100)
    ///     .at(JsonPath::root());
    /// ```
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            path: JsonPath::root(),
            help: None,
        }
    }

    /// Get the error code, if any.
    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    /// Get the primary message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the path of the offending value.
    pub fn path(&self) -> &JsonPath {
        &self.path
    }

    /// Get the help text, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Set the error code.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the path of the offending value.
    pub fn at(mut self, path: JsonPath) -> Self {
        self.path = path;
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: "error[E001] at lemmas[0]: message" or "error: message"
        write!(f, "error")?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        if !self.path.is_root() {
            write!(f, " at {}", self.path)?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for Diagnostic {}
