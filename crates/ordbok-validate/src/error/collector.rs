//! Collector for accumulating diagnostics during validation.
//!
//! The [`DiagnosticCollector`] lets the validator report every mismatch in a
//! document instead of stopping at the first one.

use crate::error::{Diagnostic, ValidationError};

/// A collector for accumulating diagnostics during one validation run.
///
/// # Example
///
/// ```text
/// let mut collector = DiagnosticCollector::default();
///
/// collector.emit(
///     Diagnostic::error("missing required field `lemma`")
///         .with_code(ErrorCode::E100)
///         .at(path)
/// );
///
/// // Finish and convert to Result
/// let article = collector.finish(article)?;
/// ```
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Emit a diagnostic to this collector.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Finish collection and return a result.
    ///
    /// - If any diagnostic was emitted, returns `Err(ValidationError)` with all
    ///   of them, even when a value was produced.
    /// - Otherwise returns the value.
    ///
    /// A missing value without diagnostics cannot happen through the
    /// validator; it is reported as an internal error diagnostic.
    pub fn finish<T>(self, value: Option<T>) -> Result<T, ValidationError> {
        if let Some(err) = ValidationError::from_diagnostics(self.diagnostics) {
            return Err(err);
        }
        value.ok_or_else(|| Diagnostic::error("validation produced no value").into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ErrorCode, path::JsonPath};

    #[test]
    fn test_collector_default_finish_ok() {
        let collector = DiagnosticCollector::default();
        assert_eq!(collector.finish(Some(1)).unwrap(), 1);
    }

    #[test]
    fn test_collector_emit_error_finish_err() {
        let mut collector = DiagnosticCollector::default();

        collector.emit(Diagnostic::error("test error"));

        let err = collector.finish(Some(1)).unwrap_err();
        assert_eq!(err.message(), "test error");
    }

    #[test]
    fn test_collector_finish_keeps_order() {
        let mut collector = DiagnosticCollector::default();

        collector.emit(
            Diagnostic::error("first")
                .with_code(ErrorCode::E100)
                .at(JsonPath::root().field("body")),
        );
        collector.emit(Diagnostic::error("second"));

        let err = collector.finish::<()>(None).unwrap_err();
        assert_eq!(err.diagnostics().len(), 2);
        assert_eq!(err.diagnostics()[0].message(), "first");
    }

    #[test]
    fn test_collector_finish_without_value_or_errors() {
        let collector = DiagnosticCollector::default();
        assert!(collector.finish::<()>(None).is_err());
    }
}
