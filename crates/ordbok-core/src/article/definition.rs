//! The sense tree of an article.
//!
//! A [`Definition`] holds an ordered list of [`DefinitionElement`]s, and an
//! element may itself be a [`Definition`]. In practice a definition is either
//! a list of senses (every element is a definition) or the leaf content of one
//! sense (explanations, examples, compound lists and sub-articles).

use crate::{
    article::{ArticleRef, Content},
    non_empty::NonEmpty,
};

/// One sense, or a grouping of senses.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Definition {
    sub_definition: Option<bool>,
    elements: Vec<DefinitionElement>,
}

impl Definition {
    /// Creates a new definition.
    ///
    /// # Arguments
    ///
    /// * `elements` - Child elements in document order.
    /// * `sub_definition` - Source flag carried as metadata; it has no effect
    ///   on rendering.
    pub fn new(elements: Vec<DefinitionElement>, sub_definition: Option<bool>) -> Self {
        Self {
            sub_definition,
            elements,
        }
    }

    pub fn elements(&self) -> &[DefinitionElement] {
        &self.elements
    }

    pub fn sub_definition(&self) -> Option<bool> {
        self.sub_definition
    }

    /// Returns `true` if every element is a nested definition.
    ///
    /// A definition without elements counts as a (trivially empty) list.
    pub fn is_definition_list(&self) -> bool {
        self.elements
            .iter()
            .all(|element| element.as_definition().is_some())
    }

    /// Nested definitions in document order.
    pub fn definitions(&self) -> impl Iterator<Item = &Definition> {
        self.elements.iter().filter_map(DefinitionElement::as_definition)
    }

    /// Explanations in document order.
    pub fn explanations(&self) -> impl Iterator<Item = &Explanation> {
        self.elements.iter().filter_map(DefinitionElement::as_explanation)
    }

    /// Examples in document order.
    pub fn examples(&self) -> impl Iterator<Item = &Example> {
        self.elements.iter().filter_map(DefinitionElement::as_example)
    }

    /// Sub-articles directly under this definition.
    pub fn sub_articles(&self) -> impl Iterator<Item = &SubArticle> {
        self.elements.iter().filter_map(DefinitionElement::as_sub_article)
    }

    /// Collects sub-articles reachable through nested definitions.
    ///
    /// The walk is pre-order: sub-articles of this definition come first,
    /// then those of each child definition in turn. Explanations, examples and
    /// compound lists are not descended into.
    pub fn nested_sub_articles(&self) -> Vec<&SubArticle> {
        let mut found = Vec::new();
        self.collect_sub_articles(&mut found);
        found
    }

    fn collect_sub_articles<'a>(&'a self, found: &mut Vec<&'a SubArticle>) {
        found.extend(self.sub_articles());
        for definition in self.definitions() {
            definition.collect_sub_articles(found);
        }
    }
}

/// An element of a [`Definition`].
#[derive(Debug, Clone, PartialEq)]
pub enum DefinitionElement {
    Definition(Definition),
    Explanation(Explanation),
    Example(Example),
    CompoundList(CompoundList),
    SubArticle(SubArticle),
}

impl DefinitionElement {
    /// Returns the wire tag of this element.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Definition(_) => "definition",
            Self::Explanation(_) => "explanation",
            Self::Example(_) => "example",
            Self::CompoundList(_) => "compound_list",
            Self::SubArticle(_) => "sub_article",
        }
    }

    pub fn as_definition(&self) -> Option<&Definition> {
        match self {
            Self::Definition(definition) => Some(definition),
            _ => None,
        }
    }

    pub fn as_explanation(&self) -> Option<&Explanation> {
        match self {
            Self::Explanation(explanation) => Some(explanation),
            _ => None,
        }
    }

    pub fn as_example(&self) -> Option<&Example> {
        match self {
            Self::Example(example) => Some(example),
            _ => None,
        }
    }

    pub fn as_sub_article(&self) -> Option<&SubArticle> {
        match self {
            Self::SubArticle(sub_article) => Some(sub_article),
            _ => None,
        }
    }
}

/// Explanatory text of a sense.
#[derive(Debug, Clone, PartialEq)]
pub struct Explanation {
    content: Content,
}

impl Explanation {
    pub fn new(content: Content) -> Self {
        Self { content }
    }

    pub fn content(&self) -> &Content {
        &self.content
    }
}

/// A usage example: a quote, optionally followed by an explanation.
#[derive(Debug, Clone, PartialEq)]
pub struct Example {
    quote: Content,
    explanation: Content,
}

impl Example {
    pub fn new(quote: Content, explanation: Content) -> Self {
        Self { quote, explanation }
    }

    pub fn quote(&self) -> &Content {
        &self.quote
    }

    /// Returns the explanation; its text may be empty.
    pub fn explanation(&self) -> &Content {
        &self.explanation
    }
}

/// A list of compound words referencing other articles.
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundList {
    elements: NonEmpty<ArticleRef>,
    intro: Content,
}

impl CompoundList {
    pub fn new(elements: NonEmpty<ArticleRef>, intro: Content) -> Self {
        Self { elements, intro }
    }

    pub fn elements(&self) -> &NonEmpty<ArticleRef> {
        &self.elements
    }

    pub fn intro(&self) -> &Content {
        &self.intro
    }
}

/// Placeholder for a nested idiom or phrase entry.
///
/// Sub-articles are extracted and listed but carry no content of their own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubArticle;

#[cfg(test)]
mod tests {
    use super::*;

    fn explanation(text: &str) -> DefinitionElement {
        DefinitionElement::Explanation(Explanation::new(Content::text_only(text)))
    }

    fn definition(elements: Vec<DefinitionElement>) -> DefinitionElement {
        DefinitionElement::Definition(Definition::new(elements, None))
    }

    #[test]
    fn test_is_definition_list() {
        let list = Definition::new(vec![definition(vec![]), definition(vec![])], None);
        assert!(list.is_definition_list());

        let mixed = Definition::new(vec![definition(vec![]), explanation("x")], None);
        assert!(!mixed.is_definition_list());

        assert!(Definition::default().is_definition_list());
    }

    #[test]
    fn test_filters_keep_document_order() {
        let root = Definition::new(
            vec![
                explanation("first"),
                DefinitionElement::SubArticle(SubArticle),
                explanation("second"),
                definition(vec![explanation("nested")]),
            ],
            Some(false),
        );

        let texts: Vec<_> = root.explanations().map(|e| e.content().text()).collect();
        assert_eq!(texts, ["first", "second"]);
        assert_eq!(root.definitions().count(), 1);
        assert_eq!(root.sub_articles().count(), 1);
        assert_eq!(root.examples().count(), 0);
        assert_eq!(root.sub_definition(), Some(false));
    }

    #[test]
    fn test_nested_sub_articles_only_follow_definitions() {
        let root = Definition::new(
            vec![
                definition(vec![
                    DefinitionElement::SubArticle(SubArticle),
                    definition(vec![DefinitionElement::SubArticle(SubArticle)]),
                ]),
                DefinitionElement::SubArticle(SubArticle),
                explanation("no descent"),
            ],
            None,
        );

        assert_eq!(root.nested_sub_articles().len(), 3);
    }

    #[test]
    fn test_element_kind() {
        assert_eq!(explanation("x").kind(), "explanation");
        assert_eq!(definition(vec![]).kind(), "definition");
        assert_eq!(
            DefinitionElement::SubArticle(SubArticle).kind(),
            "sub_article"
        );
    }
}
