//! Structural validation of Ordbok article documents.
//!
//! Stored articles are untrusted JSON. This crate checks a decoded document
//! against the article schema and builds the [`Article`] model defined in
//! `ordbok-core`. Validation is all-or-nothing: either the whole document is
//! accepted, or a [`ValidationError`] lists every mismatch with its
//! [`JsonPath`].
//!
//! # Example
//!
//! ```
//! let json = r#"{
//!     "article_id": 1,
//!     "lemmas": [{"hgno": 0, "lemma": "foo", "paradigm_info": [{"inflection_group": "m1"}]}],
//!     "body": {"definitions": [{"type_": "definition", "elements": []}]}
//! }"#;
//!
//! let article = ordbok_validate::parse(json).expect("valid article");
//! assert_eq!(article.primary_lemma().text(), "foo");
//! ```

pub mod error;

mod path;
mod validator;

pub use error::ValidationError;
pub use path::{JsonPath, PathSegment};

use log::{debug, trace};
use serde::Deserialize;
use serde_json::Value;

use ordbok_core::article::Article;

use error::{Diagnostic, ErrorCode};
use validator::Validator;

/// Validates a decoded JSON value as an article.
///
/// # Errors
///
/// Returns [`ValidationError`] carrying every structural mismatch found.
pub fn validate(raw: &Value) -> Result<Article, ValidationError> {
    let mut validator = Validator::new();
    let article = validator.article(raw, &JsonPath::root());
    let article = validator.into_collector().finish(article)?;

    debug!(article_id = article.article_id(); "Article validated");
    trace!(article:?; "Validated article");

    Ok(article)
}

/// Decodes JSON text and validates it as an article.
///
/// # Errors
///
/// Returns [`ValidationError`] with an [`ErrorCode::E104`] diagnostic if the
/// text is not JSON, or the structural mismatches otherwise.
///
/// Nesting depth is not limited: the decoder grows its stack on demand
/// instead of stopping at serde_json's default limit of 128 levels.
pub fn parse(json: &str) -> Result<Article, ValidationError> {
    let raw = decode(json).map_err(|err| {
        Diagnostic::error(format!("invalid JSON: {err}"))
            .with_code(ErrorCode::E104)
            .with_help("the article document must be a single JSON object")
    })?;
    validate(&raw)
}

fn decode(json: &str) -> Result<Value, serde_json::Error> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    deserializer.disable_recursion_limit();
    let raw = Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    Ok(raw)
}
