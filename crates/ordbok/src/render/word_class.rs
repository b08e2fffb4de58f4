//! Word-class line.

use log::warn;

use ordbok_core::article::Lemma;

use super::Renderer;
use crate::markup::Element;

/// Returns the built-in label for a word-class tag.
pub fn builtin_word_class(tag: &str) -> Option<&'static str> {
    match tag {
        "CCONJ" => Some("konjunksjon"),
        "a1" => Some("adjektiv"),
        "verb" | "v1" => Some("verb"),
        "m1" => Some("substantiv hankjønn"),
        "n1" => Some("substantiv intetkjønn"),
        _ => None,
    }
}

impl Renderer<'_> {
    /// Renders the word class of `lemma` as a `<div>`.
    ///
    /// Built-in labels come first, then configured ones. An unknown tag is not
    /// fatal: it is logged and rendered as `Unknown: TAG`.
    pub(super) fn word_class(&self, lemma: &Lemma) -> Element {
        let tag = lemma.word_class_tag();

        let label = if let Some(label) = builtin_word_class(tag) {
            label.to_string()
        } else if let Some(label) = self.config.word_class_label(tag) {
            label.to_string()
        } else {
            warn!(tag, lemma = lemma.text(); "Unknown word class");
            format!("Unknown: {tag}")
        };

        Element::new("div").with_text(label)
    }
}

#[cfg(test)]
mod tests {
    use ordbok_core::{article::ParadigmInfo, concept::ConceptTable, non_empty::NonEmpty};

    use super::*;
    use crate::{config::AppConfig, markup::Node};

    fn lemma(inflection_class: Option<&str>, group: &str) -> Lemma {
        Lemma::new(
            "x",
            0,
            inflection_class.map(str::to_string),
            NonEmpty::one(ParadigmInfo::new(group)),
        )
    }

    fn render(lemma: &Lemma, config: &AppConfig) -> String {
        let concepts = ConceptTable::default();
        let element = Renderer::new(&concepts, config).word_class(lemma);
        assert_eq!(element.tag(), "div");
        Node::from(element).text_content()
    }

    #[test]
    fn test_builtin_table() {
        assert_eq!(builtin_word_class("CCONJ"), Some("konjunksjon"));
        assert_eq!(builtin_word_class("a1"), Some("adjektiv"));
        assert_eq!(builtin_word_class("verb"), Some("verb"));
        assert_eq!(builtin_word_class("v1"), Some("verb"));
        assert_eq!(builtin_word_class("m1"), Some("substantiv hankjønn"));
        assert_eq!(builtin_word_class("n1"), Some("substantiv intetkjønn"));
        assert_eq!(builtin_word_class("M1"), None);
    }

    #[test]
    fn test_inflection_class_wins() {
        let config = AppConfig::default();
        assert_eq!(render(&lemma(Some("v1"), "m1"), &config), "verb");
    }

    #[test]
    fn test_falls_back_to_first_paradigm() {
        let config = AppConfig::default();
        assert_eq!(render(&lemma(None, "n1"), &config), "substantiv intetkjønn");
    }

    #[test]
    fn test_unknown_tag_renders_fallback() {
        let config = AppConfig::default();
        assert_eq!(render(&lemma(None, "adv"), &config), "Unknown: adv");
    }

    #[test]
    fn test_configured_label() {
        let config: AppConfig = toml::from_str(
            r#"
            [word_classes]
            adv = "adverb"
            m1 = "ignored"
            "#,
        )
        .unwrap();

        assert_eq!(render(&lemma(None, "adv"), &config), "adverb");
        assert_eq!(render(&lemma(None, "m1"), &config), "substantiv hankjønn");
    }
}
