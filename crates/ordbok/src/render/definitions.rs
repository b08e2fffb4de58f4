//! Definitions section and fixed expressions.
//!
//! The root definition is either a *definition list* (every element is a
//! definition, rendered as numbered senses) or a single definition rendered
//! directly. Child definitions below a sense render as nested bullet lists.

use ordbok_core::article::{Definition, Example};

use super::{RenderError, Renderer, heading};
use crate::markup::{Element, Node};

impl Renderer<'_> {
    /// Renders the definitions heading, the definition tree and, when any
    /// sub-articles are reachable, the fixed expressions list.
    pub(super) fn definitions(&self, root: &Definition) -> Result<Vec<Node>, RenderError> {
        let labels = self.config.labels();
        let mut nodes = vec![heading("h4", labels.definitions())];

        if root.is_definition_list() {
            let senses = root
                .definitions()
                .map(|sense| self.definition_body(sense).map(list_item))
                .collect::<Result<Vec<_>, _>>()?;
            nodes.push(Element::new("ol").with_children(senses).into());
        } else {
            nodes.extend(self.definition_body(root)?);
        }

        let sub_articles = root.nested_sub_articles();
        if !sub_articles.is_empty() {
            nodes.push(heading("h4", labels.sub_articles()));
            let stubs = sub_articles
                .iter()
                .map(|_| Element::new("li").with_class("sub-article").into());
            nodes.push(Element::new("ul").with_children(stubs).into());
        }

        Ok(nodes)
    }

    /// Explanations, headed example list, then child definitions.
    fn definition_body(&self, definition: &Definition) -> Result<Vec<Node>, RenderError> {
        let mut nodes = self.explanations(definition)?;

        if let Some(examples) = self.example_list(definition)? {
            nodes.push(heading("h5", self.config.labels().examples()));
            nodes.push(examples.into());
        }
        if let Some(children) = self.sub_definition_list(definition)? {
            nodes.push(children.into());
        }

        Ok(nodes)
    }

    /// Explanations, example list without heading, then child definitions.
    fn sub_definition_body(&self, definition: &Definition) -> Result<Vec<Node>, RenderError> {
        let mut nodes = self.explanations(definition)?;

        if let Some(examples) = self.example_list(definition)? {
            nodes.push(examples.into());
        }
        if let Some(children) = self.sub_definition_list(definition)? {
            nodes.push(children.into());
        }

        Ok(nodes)
    }

    fn explanations(&self, definition: &Definition) -> Result<Vec<Node>, RenderError> {
        definition
            .explanations()
            .map(|explanation| -> Result<Node, RenderError> {
                let content = self.content(explanation.content())?;
                Ok(Element::new("div")
                    .with_class("explanation")
                    .with_children(content)
                    .into())
            })
            .collect()
    }

    fn example_list(&self, definition: &Definition) -> Result<Option<Element>, RenderError> {
        let examples = definition
            .examples()
            .map(|example| self.example(example).map(Node::from))
            .collect::<Result<Vec<_>, _>>()?;

        Ok((!examples.is_empty()).then(|| Element::new("ul").with_children(examples)))
    }

    fn sub_definition_list(&self, definition: &Definition) -> Result<Option<Element>, RenderError> {
        let children = definition
            .definitions()
            .map(|child| self.sub_definition_body(child).map(list_item))
            .collect::<Result<Vec<_>, _>>()?;

        Ok((!children.is_empty()).then(|| Element::new("ul").with_children(children)))
    }

    /// `<li><em>quote</em><p>explanation</p></li>`, without the `<p>` when the
    /// explanation text is empty.
    fn example(&self, example: &Example) -> Result<Element, RenderError> {
        let quote = Element::new("em").with_children(self.content(example.quote())?);
        let mut item = Element::new("li").with_child(quote);

        let explanation = example.explanation();
        if !explanation.is_empty() {
            item = item.with_child(Element::new("p").with_children(self.content(explanation)?));
        }

        Ok(item)
    }
}

fn list_item(children: Vec<Node>) -> Node {
    Element::new("li").with_children(children).into()
}
