//! Inline content and the items interpolated into it.
//!
//! Text in an article is stored as a [`Content`]: a literal string with `$`
//! placeholders plus an ordered list of [`Item`]s. Placeholder *i* (counting
//! from zero, left to right) stands for `items[i]`.
//!
//! [`Item::QuoteInset`] carries a nested [`Content`], so items can contain
//! items to any depth.

use std::fmt;

use crate::non_empty::NonEmpty;

/// The interpolation marker inside [`Content`] text.
pub const PLACEHOLDER: char = '$';

/// Literal text paired with the items its placeholders refer to.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Content {
    content: String,
    items: Vec<Item>,
}

impl Content {
    pub fn new(content: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            content: content.into(),
            items,
        }
    }

    /// Creates content without any items.
    pub fn text_only(content: impl Into<String>) -> Self {
        Self::new(content, Vec::new())
    }

    /// Returns the raw text, placeholders included.
    pub fn text(&self) -> &str {
        &self.content
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns `true` when the literal text is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Counts the placeholders in the literal text.
    pub fn placeholder_count(&self) -> usize {
        self.content.matches(PLACEHOLDER).count()
    }

    /// Splits the literal text on placeholders.
    ///
    /// Always yields `placeholder_count() + 1` segments; the segment at
    /// index `i + 1` follows `items[i]`.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.content.split(PLACEHOLDER)
    }
}

/// The category of a concept reference item.
///
/// Every kind resolves through the same concept table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConceptKind {
    Relation,
    Entity,
    Grammar,
    Rhetoric,
    Temporal,
    Domain,
    Language,
}

impl ConceptKind {
    /// All kinds, in tag order.
    pub const ALL: [ConceptKind; 7] = [
        Self::Relation,
        Self::Entity,
        Self::Grammar,
        Self::Rhetoric,
        Self::Temporal,
        Self::Domain,
        Self::Language,
    ];

    /// Returns the wire tag of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Relation => "relation",
            Self::Entity => "entity",
            Self::Grammar => "grammar",
            Self::Rhetoric => "rhetoric",
            Self::Temporal => "temporal",
            Self::Domain => "domain",
            Self::Language => "language",
        }
    }

    /// Looks up a kind by its wire tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == tag)
    }
}

impl fmt::Display for ConceptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A lemma named by an article reference.
#[derive(Debug, Clone, PartialEq)]
pub struct LemmaRef {
    lemma: String,
}

impl LemmaRef {
    pub fn new(lemma: impl Into<String>) -> Self {
        Self {
            lemma: lemma.into(),
        }
    }

    pub fn lemma(&self) -> &str {
        &self.lemma
    }
}

/// A cross-reference to another article.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleRef {
    lemmas: NonEmpty<LemmaRef>,
}

impl ArticleRef {
    pub fn new(lemmas: NonEmpty<LemmaRef>) -> Self {
        Self { lemmas }
    }

    pub fn lemmas(&self) -> &NonEmpty<LemmaRef> {
        &self.lemmas
    }

    /// Returns the lemma used when the reference is displayed.
    pub fn display_lemma(&self) -> &str {
        self.lemmas.first().lemma()
    }
}

/// An inline, typed reference embedded in text content.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    /// Cross-reference to another article.
    ArticleRef(ArticleRef),
    /// Literal usage text.
    Usage { text: String },
    /// Opaque concept id expanded through the concept table.
    Concept { kind: ConceptKind, id: String },
    Superscript { text: String },
    Subscript { text: String },
    Fraction { numerator: f64, denominator: f64 },
    /// Quoted text with its own items.
    QuoteInset(Content),
}

impl Item {
    /// Returns the wire tag of this item.
    pub fn kind(&self) -> &'static str {
        match self {
            Item::ArticleRef(_) => "article_ref",
            Item::Usage { .. } => "usage",
            Item::Concept { kind, .. } => kind.as_str(),
            Item::Superscript { .. } => "superscript",
            Item::Subscript { .. } => "subscript",
            Item::Fraction { .. } => "fraction",
            Item::QuoteInset(_) => "quote_inset",
        }
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn content_text_strategy() -> impl Strategy<Value = String> {
        "[a-zæøå $]{0,40}"
    }

    // ===================
    // Property Test Functions
    // ===================

    /// There is always exactly one more segment than there are placeholders.
    fn check_segment_count(text: &str) -> Result<(), TestCaseError> {
        let content = Content::text_only(text);
        prop_assert_eq!(content.segments().count(), content.placeholder_count() + 1);
        Ok(())
    }

    /// Joining the segments with the placeholder restores the original text.
    fn check_segments_rejoin(text: &str) -> Result<(), TestCaseError> {
        let content = Content::text_only(text);
        let rejoined = content
            .segments()
            .collect::<Vec<_>>()
            .join(&PLACEHOLDER.to_string());
        prop_assert_eq!(rejoined, text);
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn segment_count_matches_placeholders(text in content_text_strategy()) {
            check_segment_count(&text)?;
        }

        #[test]
        fn segments_rejoin_to_text(text in content_text_strategy()) {
            check_segments_rejoin(&text)?;
        }
    }
}
