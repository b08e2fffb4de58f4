//! Error adapter for converting CLI errors to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.
//!
//! # Multi-Error Support
//!
//! A [`ValidationError`](ordbok::OrdbokError::Validation) of an article holds
//! every structural mismatch found; each one is rendered as its own report
//! with its error code, JSON path and help text.

use std::fmt;

use log::error;
use miette::{Diagnostic as MietteDiagnostic, GraphicalReportHandler, LabeledSpan};

use ordbok::OrdbokError;
use ordbok_validate::error::Diagnostic;

use crate::error::CliError;

/// Adapter for a single validation diagnostic of one article.
pub struct DiagnosticAdapter<'a> {
    diag: &'a Diagnostic,
    article_id: u64,
}

impl<'a> DiagnosticAdapter<'a> {
    /// Create a new diagnostic adapter.
    pub fn new(diag: &'a Diagnostic, article_id: u64) -> Self {
        Self { diag, article_id }
    }
}

impl fmt::Debug for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticAdapter")
            .field("diag", &self.diag)
            .field("article_id", &self.article_id)
            .finish()
    }
}

impl fmt::Display for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = self.diag.path();
        if path.is_root() {
            write!(f, "article {}: {}", self.article_id, self.diag.message())
        } else {
            write!(
                f,
                "article {} at {path}: {}",
                self.article_id,
                self.diag.message()
            )
        }
    }
}

impl std::error::Error for DiagnosticAdapter<'_> {}

impl MietteDiagnostic for DiagnosticAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .code()
            .map(|c| Box::new(c) as Box<dyn fmt::Display>)
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .help()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }
}

/// Adapter for errors without per-path diagnostics.
pub struct ErrorAdapter<'a>(pub &'a CliError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            CliError::Io(_) => "ordbok::io",
            CliError::Config(_) => "ordbok::config",
            CliError::Ordbok(err) | CliError::Article { err, .. } => library_code(err),
            CliError::Batch { .. } => "ordbok::batch",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self.0 {
            CliError::Batch { .. } => Some(Box::new(
                "the reports above give the cause of each failed article",
            )),
            _ => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

fn library_code(err: &OrdbokError) -> &'static str {
    match err {
        OrdbokError::Io(_) => "ordbok::io",
        OrdbokError::Validation(_) => "ordbok::validation",
        OrdbokError::Render(_) => "ordbok::render",
        OrdbokError::Concepts(_) => "ordbok::concepts",
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A validation diagnostic with its JSON path.
    Diagnostic(DiagnosticAdapter<'a>),
    /// Any other error.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Diagnostic(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Diagnostic(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Diagnostic(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a [`CliError`] into a list of reportable errors.
///
/// A validation failure of an article yields one [`Reportable`] per
/// diagnostic. Every other error yields a single [`Reportable`].
pub fn to_reportables(err: &CliError) -> Vec<Reportable<'_>> {
    match err {
        CliError::Article {
            article_id,
            err: OrdbokError::Validation(validation),
        } => validation
            .diagnostics()
            .iter()
            .map(|d| Reportable::Diagnostic(DiagnosticAdapter::new(d, *article_id)))
            .collect(),
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}

/// Render every reportable of `err` with miette and log it at error level.
pub fn report(err: &CliError) {
    let reporter = GraphicalReportHandler::new();

    for reportable in to_reportables(err) {
        let mut writer = String::new();
        match reporter.render_report(&mut writer, &reportable) {
            Ok(()) => error!("{writer}"),
            Err(_) => error!("{reportable}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use ordbok::render::RenderError;
    use ordbok_validate::{
        JsonPath, ValidationError,
        error::{Diagnostic, ErrorCode},
    };

    use super::*;

    fn article_error(diag: Diagnostic) -> CliError {
        CliError::Article {
            article_id: 7,
            err: OrdbokError::Validation(ValidationError::from(diag)),
        }
    }

    #[test]
    fn test_single_diagnostic() {
        let diag = Diagnostic::error("expected string, found number")
            .with_code(ErrorCode::E003)
            .at(JsonPath::root().field("lemmas").index(0).field("lemma"))
            .with_help("lemma text must be a string");
        let err = article_error(diag);

        let reportables = to_reportables(&err);
        assert_eq!(reportables.len(), 1);

        match &reportables[0] {
            Reportable::Diagnostic(d) => {
                assert_eq!(
                    d.to_string(),
                    "article 7 at lemmas[0].lemma: expected string, found number"
                );
                assert_eq!(d.code().unwrap().to_string(), "E003");
                assert_eq!(d.help().unwrap().to_string(), "lemma text must be a string");
            }
            Reportable::Error(_) => panic!("Expected Diagnostic"),
        }
    }

    #[test]
    fn test_root_diagnostic_has_no_path() {
        let err = article_error(Diagnostic::error("invalid JSON").with_code(ErrorCode::E104));

        let reportables = to_reportables(&err);
        assert_eq!(reportables[0].to_string(), "article 7: invalid JSON");
    }

    #[test]
    fn test_multiple_diagnostics() {
        let validation = ordbok_validate::parse(r#"{"article_id": -1, "lemmas": []}"#)
            .expect_err("document is invalid");
        let err = CliError::Article {
            article_id: 7,
            err: OrdbokError::Validation(validation),
        };

        let reportables = to_reportables(&err);

        // article_id, lemmas and body are each reported
        assert_eq!(reportables.len(), 3);
        assert!(reportables[0].to_string().starts_with("article 7 at article_id: "));
        assert!(reportables[1].to_string().starts_with("article 7 at lemmas: "));
        assert!(reportables[2].to_string().starts_with("article 7: "));
    }

    #[test]
    fn test_non_validation_error() {
        let err = CliError::Article {
            article_id: 3,
            err: OrdbokError::Render(RenderError::UnknownConcept("xyz".to_string())),
        };

        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 1);
        match &reportables[0] {
            Reportable::Error(e) => {
                assert_eq!(
                    e.to_string(),
                    "Article 3: Render error: unknown concept id `xyz`"
                );
                assert_eq!(e.code().unwrap().to_string(), "ordbok::render");
            }
            Reportable::Diagnostic(_) => panic!("Expected Error"),
        }
    }

    #[test]
    fn test_batch_error() {
        let err = CliError::Batch {
            failed: vec![3, 99],
            total: 5,
        };

        let reportables = to_reportables(&err);

        assert_eq!(reportables[0].to_string(), "2 of 5 article(s) failed: [3, 99]");
        assert_eq!(reportables[0].code().unwrap().to_string(), "ordbok::batch");
        assert!(reportables[0].help().is_some());
    }
}
