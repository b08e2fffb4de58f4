//! Configuration types for Ordbok article rendering.
//!
//! All types implement [`serde::Deserialize`] and default every missing
//! section, so an empty configuration file is valid.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining the sections below.
//! - [`LabelConfig`] - Section headings used in rendered articles.
//! - [`PathConfig`] - Default data locations used by the command line tool.
//!
//! Extra word-class labels are a plain tag → label table, consulted after the
//! built-in word classes.
//!
//! # Example
//!
//! ```
//! # use ordbok::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.labels().etymology(), "Opphav");
//! assert!(config.word_class_label("adv").is_none());
//! ```

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Section heading labels.
    #[serde(default)]
    labels: LabelConfig,

    /// Extra word-class tag → label entries, in file order.
    #[serde(default)]
    word_classes: IndexMap<String, String>,

    /// Data locations.
    #[serde(default)]
    paths: PathConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    ///
    /// # Arguments
    ///
    /// * `labels` - Section headings.
    /// * `word_classes` - Extra word-class labels keyed by tag.
    /// * `paths` - Data locations.
    pub fn new(
        labels: LabelConfig,
        word_classes: IndexMap<String, String>,
        paths: PathConfig,
    ) -> Self {
        Self {
            labels,
            word_classes,
            paths,
        }
    }

    /// Returns the section heading labels.
    pub fn labels(&self) -> &LabelConfig {
        &self.labels
    }

    /// Returns the configured label for a word-class tag, if any.
    pub fn word_class_label(&self, tag: &str) -> Option<&str> {
        self.word_classes.get(tag).map(String::as_str)
    }

    /// Returns the data locations.
    pub fn paths(&self) -> &PathConfig {
        &self.paths
    }
}

/// Section headings used by the renderer.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    etymology: String,
    definitions: String,
    examples: String,
    sub_articles: String,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            etymology: "Opphav".to_string(),
            definitions: "Betydning og bruk".to_string(),
            examples: "Eksempel".to_string(),
            sub_articles: "Faste uttrykk".to_string(),
        }
    }
}

impl LabelConfig {
    /// Heading of the etymology section.
    pub fn etymology(&self) -> &str {
        &self.etymology
    }

    /// Heading of the definitions section.
    pub fn definitions(&self) -> &str {
        &self.definitions
    }

    /// Heading above a definition's example list.
    pub fn examples(&self) -> &str {
        &self.examples
    }

    /// Heading of the fixed expressions section.
    pub fn sub_articles(&self) -> &str {
        &self.sub_articles
    }
}

/// Default data locations, relative to the working directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    articles: PathBuf,
    entries: PathBuf,
    concepts: PathBuf,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            articles: PathBuf::from("data/articles"),
            entries: PathBuf::from("data/entries"),
            concepts: PathBuf::from("data/concepts.json"),
        }
    }
}

impl PathConfig {
    /// Directory holding `{id}.json` article documents.
    pub fn articles(&self) -> &Path {
        &self.articles
    }

    /// Directory receiving `{id}.html` fragments.
    pub fn entries(&self) -> &Path {
        &self.entries
    }

    /// Concept table file.
    pub fn concepts(&self) -> &Path {
        &self.concepts
    }
}
