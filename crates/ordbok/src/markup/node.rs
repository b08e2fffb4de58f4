//! Markup tree nodes.

/// A node of the output markup tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    /// Creates a text node.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Returns the element, if this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    /// Concatenates all text below this node, in document order.
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        self.collect_text(&mut text);
        text
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(text),
            Self::Element(element) => {
                for child in element.children() {
                    child.collect_text(out);
                }
            }
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

/// An element with a tag name, an optional class and child nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    class: Option<&'static str>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            class: None,
            children: Vec::new(),
        }
    }

    /// Sets the `class` attribute.
    pub fn with_class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    /// Appends a single child.
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Appends children in order.
    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Appends a text child.
    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_child(Node::text(text))
    }

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn class(&self) -> Option<&'static str> {
        self.class
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Child elements, skipping text nodes.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_content_is_document_order() {
        let node: Node = Element::new("p")
            .with_text("a ")
            .with_child(Element::new("sup").with_text("2"))
            .with_text(" b")
            .into();

        assert_eq!(node.text_content(), "a 2 b");
    }

    #[test]
    fn test_child_elements_skip_text() {
        let element = Element::new("li")
            .with_text("x")
            .with_child(Element::new("em"))
            .with_class("entry");

        let tags: Vec<_> = element.child_elements().map(Element::tag).collect();
        assert_eq!(tags, ["em"]);
        assert_eq!(element.class(), Some("entry"));
    }
}
