//! Etymology section.

use ordbok_core::article::EtymologyEntry;

use super::{RenderError, Renderer, heading};
use crate::markup::Element;

impl Renderer<'_> {
    /// Renders `<section><h4>…</h4><span>…</span></section>`, or nothing when
    /// the article has no etymology.
    ///
    /// The interpolated content of every entry is concatenated in order
    /// inside a single `<span>`.
    pub(super) fn etymology(
        &self,
        entries: Option<&[EtymologyEntry]>,
    ) -> Result<Option<Element>, RenderError> {
        let Some(entries) = entries else {
            return Ok(None);
        };

        let mut contents = Vec::new();
        for entry in entries {
            contents.extend(self.content(entry.content())?);
        }

        let section = Element::new("section")
            .with_child(heading("h4", self.config.labels().etymology()))
            .with_child(Element::new("span").with_children(contents));

        Ok(Some(section))
    }
}

#[cfg(test)]
mod tests {
    use ordbok_core::{
        article::{ConceptKind, Content, EtymologyKind, Item},
        concept::ConceptTable,
    };

    use super::*;
    use crate::{config::AppConfig, markup::html};

    fn render(entries: Option<&[EtymologyEntry]>) -> Result<Option<Element>, RenderError> {
        let concepts: ConceptTable = [("norr", "norrønt")].into_iter().collect();
        let config = AppConfig::default();
        Renderer::new(&concepts, &config).etymology(entries)
    }

    #[test]
    fn test_absent_etymology_renders_nothing() {
        assert_eq!(render(None), Ok(None));
    }

    #[test]
    fn test_entries_are_concatenated() {
        let entries = [
            EtymologyEntry::new(
                EtymologyKind::Language,
                Content::new(
                    "av $ ",
                    vec![Item::Concept {
                        kind: ConceptKind::Language,
                        id: "norr".to_string(),
                    }],
                ),
            ),
            EtymologyEntry::new(EtymologyKind::Litt, Content::text_only("and")),
        ];

        let section = render(Some(&entries)).unwrap().unwrap();

        assert_eq!(
            html::to_html(&[section.into()]).unwrap(),
            "<section><h4>Opphav</h4><span>av norrønt and</span></section>"
        );
    }

    #[test]
    fn test_empty_entry_list_still_renders_section() {
        let section = render(Some(&[])).unwrap().unwrap();

        assert_eq!(
            html::to_html(&[section.into()]).unwrap(),
            "<section><h4>Opphav</h4><span></span></section>"
        );
    }

    #[test]
    fn test_unknown_concept_fails() {
        let entries = [EtymologyEntry::new(
            EtymologyKind::Reference,
            Content::new(
                "$",
                vec![Item::Concept {
                    kind: ConceptKind::Language,
                    id: "lat".to_string(),
                }],
            ),
        )];

        assert_eq!(
            render(Some(&entries)),
            Err(RenderError::UnknownConcept("lat".to_string()))
        );
    }
}
