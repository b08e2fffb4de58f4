//! Ordbok - Validation and HTML rendering of Norwegian dictionary articles.
//!
//! Stored articles are JSON documents. This crate ties the pipeline
//! together: validation into the `ordbok-core` article model, rendering to a
//! markup tree with concept expansion, and serialization to an HTML fragment.

pub mod config;
pub mod markup;
pub mod render;

mod error;

pub use ordbok_core::{article, concept, non_empty};

pub use error::OrdbokError;

use log::{debug, info, trace};
use serde_json::Value;

use article::Article;
use concept::ConceptTable;
use config::AppConfig;
use markup::Node;

/// Builder for validating and rendering dictionary articles.
///
/// Holds the configuration and the concept table shared by every article it
/// processes.
///
/// # Examples
///
/// ```rust
/// use ordbok::{EntryBuilder, concept::ConceptTable, config::AppConfig};
///
/// let json = r#"{
///     "article_id": 7,
///     "lemmas": [{"hgno": 0, "lemma": "foo", "paradigm_info": [{"inflection_group": "m1"}]}],
///     "body": {"definitions": [{"type_": "definition", "elements": [
///         {"type_": "explanation", "content": "means bar", "items": []}
///     ]}]}
/// }"#;
///
/// let builder = EntryBuilder::new(AppConfig::default(), ConceptTable::default());
///
/// let article = builder.parse(json).expect("Failed to validate");
/// let html = builder.render_html(&article).expect("Failed to render");
///
/// assert!(html.starts_with("<h3><span>foo</span></h3>"));
/// ```
#[derive(Debug, Default)]
pub struct EntryBuilder {
    config: AppConfig,
    concepts: ConceptTable,
}

impl EntryBuilder {
    /// Create a new entry builder.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including section labels
    /// * `concepts` - Concept table used to expand concept references
    pub fn new(config: AppConfig, concepts: ConceptTable) -> Self {
        Self { config, concepts }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn concepts(&self) -> &ConceptTable {
        &self.concepts
    }

    /// Parse JSON text and validate it into an article.
    ///
    /// # Errors
    ///
    /// Returns [`OrdbokError::Validation`] for malformed JSON or any
    /// structural mismatch.
    pub fn parse(&self, json: &str) -> Result<Article, OrdbokError> {
        info!("Validating article");
        let article = ordbok_validate::parse(json)?;
        debug!(article_id = article.article_id(); "Article validated successfully");
        Ok(article)
    }

    /// Validate an already decoded JSON value into an article.
    ///
    /// # Errors
    ///
    /// Returns [`OrdbokError::Validation`] for any structural mismatch.
    pub fn validate(&self, raw: &Value) -> Result<Article, OrdbokError> {
        info!("Validating article");
        let article = ordbok_validate::validate(raw)?;
        debug!(article_id = article.article_id(); "Article validated successfully");
        Ok(article)
    }

    /// Render an article to a markup tree.
    ///
    /// # Errors
    ///
    /// Returns [`OrdbokError::Render`] for unknown concepts, homograph numbers
    /// above ten, or placeholder mismatches.
    pub fn render(&self, article: &Article) -> Result<Vec<Node>, OrdbokError> {
        info!(article_id = article.article_id(); "Rendering article");
        let nodes = render::render_article(article, &self.concepts, &self.config)?;
        Ok(nodes)
    }

    /// Render an article to an HTML fragment.
    ///
    /// # Errors
    ///
    /// Returns [`OrdbokError::Render`] if rendering or serialization fails.
    pub fn render_html(&self, article: &Article) -> Result<String, OrdbokError> {
        let nodes = self.render(article)?;
        let html = markup::html::to_html(&nodes)?;

        info!(article_id = article.article_id(), bytes = html.len(); "HTML rendered successfully");
        trace!(html; "Rendered HTML");

        Ok(html)
    }
}
