//! HTML serialization of the markup tree.
//!
//! Pipeline: markup [`Node`]s → RcDom handles → HTML string. Escaping of text
//! and attribute values is left to html5ever's serializer.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use html5ever::{
    Attribute, LocalName, QualName, ns, serialize, serialize::SerializeOpts,
    serialize::TraversalScope,
};
use markup5ever_rcdom::{Handle, Node as DomNode, NodeData, SerializableHandle};

use crate::{
    markup::{Element, Node},
    render::RenderError,
};

/// Serializes a sequence of top-level nodes to an HTML fragment.
///
/// # Errors
///
/// Returns [`RenderError::Serialize`] if html5ever fails to write the
/// fragment or produces invalid UTF-8.
pub fn to_html(nodes: &[Node]) -> Result<String, RenderError> {
    let mut output = Vec::new();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };

    for node in nodes {
        let serializable = SerializableHandle::from(to_handle(node));
        serialize(&mut output, &serializable, opts.clone())
            .map_err(|err| RenderError::Serialize(format!("HTML serialization failed: {err}")))?;
    }

    String::from_utf8(output)
        .map_err(|err| RenderError::Serialize(format!("UTF-8 conversion failed: {err}")))
}

fn to_handle(node: &Node) -> Handle {
    match node {
        Node::Text(text) => create_text(text),
        Node::Element(element) => {
            let handle = create_element(element);
            handle
                .children
                .borrow_mut()
                .extend(element.children().iter().map(to_handle));
            handle
        }
    }
}

/// Create an element node without children
fn create_element(element: &Element) -> Handle {
    let qual_name = QualName::new(None, ns!(html), LocalName::from(element.tag()));
    let attributes = element
        .class()
        .map(|class| Attribute {
            name: QualName::new(None, ns!(), LocalName::from("class")),
            value: class.into(),
        })
        .into_iter()
        .collect();

    Rc::new(DomNode {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Element {
            name: qual_name,
            attrs: RefCell::new(attributes),
            template_contents: Default::default(),
            mathml_annotation_xml_integration_point: false,
        },
    })
}

/// Create a text node
fn create_text(text: &str) -> Handle {
    Rc::new(DomNode {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Text {
            contents: RefCell::new(text.to_string().into()),
        },
    })
}
