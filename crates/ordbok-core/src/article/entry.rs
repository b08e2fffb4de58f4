//! Top-level article structures.

use std::fmt;

use crate::{
    article::{Content, Definition},
    non_empty::NonEmpty,
};

/// One dictionary entry, possibly covering several homographs.
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    article_id: u64,
    lemmas: NonEmpty<Lemma>,
    body: Body,
}

impl Article {
    /// Creates a new article.
    ///
    /// # Arguments
    ///
    /// * `article_id` - Numeric identifier the document is stored under.
    /// * `lemmas` - Headwords of the article, in display order.
    /// * `body` - Etymology and the root definition.
    pub fn new(article_id: u64, lemmas: NonEmpty<Lemma>, body: Body) -> Self {
        Self {
            article_id,
            lemmas,
            body,
        }
    }

    pub fn article_id(&self) -> u64 {
        self.article_id
    }

    pub fn lemmas(&self) -> &NonEmpty<Lemma> {
        &self.lemmas
    }

    /// Returns the lemma whose metadata classifies the whole article.
    pub fn primary_lemma(&self) -> &Lemma {
        self.lemmas.first()
    }

    pub fn body(&self) -> &Body {
        &self.body
    }
}

/// A canonical word form plus its grammatical metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Lemma {
    hgno: u32,
    inflection_class: Option<String>,
    paradigm_info: NonEmpty<ParadigmInfo>,
    lemma: String,
}

impl Lemma {
    /// Creates a new lemma.
    ///
    /// # Arguments
    ///
    /// * `lemma` - The word form.
    /// * `hgno` - Homograph number; `0` when the lemma has no homographs.
    /// * `inflection_class` - Explicit word-class tag, if the source carries one.
    /// * `paradigm_info` - Inflection group tags in source order.
    pub fn new(
        lemma: impl Into<String>,
        hgno: u32,
        inflection_class: Option<String>,
        paradigm_info: NonEmpty<ParadigmInfo>,
    ) -> Self {
        Self {
            hgno,
            inflection_class,
            paradigm_info,
            lemma: lemma.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.lemma
    }

    pub fn hgno(&self) -> u32 {
        self.hgno
    }

    pub fn inflection_class(&self) -> Option<&str> {
        self.inflection_class.as_deref()
    }

    pub fn paradigm_info(&self) -> &NonEmpty<ParadigmInfo> {
        &self.paradigm_info
    }

    /// Returns the tag that decides the word class of this lemma.
    ///
    /// The explicit inflection class wins; otherwise the first paradigm's
    /// inflection group is used.
    pub fn word_class_tag(&self) -> &str {
        self.inflection_class
            .as_deref()
            .unwrap_or_else(|| self.paradigm_info.first().inflection_group())
    }
}

/// A single paradigm entry of a lemma.
#[derive(Debug, Clone, PartialEq)]
pub struct ParadigmInfo {
    inflection_group: String,
}

impl ParadigmInfo {
    pub fn new(inflection_group: impl Into<String>) -> Self {
        Self {
            inflection_group: inflection_group.into(),
        }
    }

    pub fn inflection_group(&self) -> &str {
        &self.inflection_group
    }
}

/// The article body: optional etymology and exactly one root definition.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    etymology: Option<Vec<EtymologyEntry>>,
    definition: Definition,
}

impl Body {
    pub fn new(etymology: Option<Vec<EtymologyEntry>>, definition: Definition) -> Self {
        Self {
            etymology,
            definition,
        }
    }

    /// Returns the etymology entries, or `None` when the article has no
    /// etymology field at all.
    pub fn etymology(&self) -> Option<&[EtymologyEntry]> {
        self.etymology.as_deref()
    }

    /// Returns the root definition.
    pub fn definition(&self) -> &Definition {
        &self.definition
    }
}

/// The kind of an etymology note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EtymologyKind {
    /// Origin in another language.
    Language,
    /// Reference to a related entry.
    Reference,
    /// Literal citation.
    Litt,
}

impl EtymologyKind {
    /// All kinds, in tag order.
    pub const ALL: [EtymologyKind; 3] = [Self::Language, Self::Reference, Self::Litt];

    /// Returns the wire tag of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Language => "etymology_language",
            Self::Reference => "etymology_reference",
            Self::Litt => "etymology_litt",
        }
    }

    /// Looks up a kind by its wire tag.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == tag)
    }
}

impl fmt::Display for EtymologyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One etymology note with interpolated content.
#[derive(Debug, Clone, PartialEq)]
pub struct EtymologyEntry {
    kind: EtymologyKind,
    content: Content,
}

impl EtymologyEntry {
    pub fn new(kind: EtymologyKind, content: Content) -> Self {
        Self { kind, content }
    }

    pub fn kind(&self) -> EtymologyKind {
        self.kind
    }

    pub fn content(&self) -> &Content {
        &self.content
    }
}
