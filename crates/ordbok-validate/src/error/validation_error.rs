//! The ValidationError type for wrapping validation diagnostics.
//!
//! [`ValidationError`] wraps every [`Diagnostic`] found while validating one
//! document. A document with any diagnostic is rejected as a whole.

use std::fmt;

use crate::{error::Diagnostic, path::JsonPath};

/// Error type for a rejected document.
///
/// Holds at least one diagnostic; the first is the primary failure.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    diagnostics: Vec<Diagnostic>,
}

impl ValidationError {
    /// Get all diagnostics in this error, in discovery order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Get the path of the primary failure.
    pub fn path(&self) -> &JsonPath {
        self.primary().path()
    }

    /// Get the message of the primary failure.
    pub fn message(&self) -> &str {
        self.primary().message()
    }

    fn primary(&self) -> &Diagnostic {
        // Both constructors guarantee at least one diagnostic.
        &self.diagnostics[0]
    }

    /// Creates an error from collected diagnostics, or `None` if there are none.
    pub(crate) fn from_diagnostics(diagnostics: Vec<Diagnostic>) -> Option<Self> {
        if diagnostics.is_empty() {
            None
        } else {
            Some(Self { diagnostics })
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.primary())?;
        if self.diagnostics.len() > 1 {
            write!(f, " (+{} more)", self.diagnostics.len() - 1)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

impl From<Diagnostic> for ValidationError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self {
            diagnostics: vec![diagnostic],
        }
    }
}
