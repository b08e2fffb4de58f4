//! Placeholder interpolation of content text.
//!
//! Content text carries one `$` placeholder per inline item. The text is
//! split on `$`; the first segment is emitted as is, and every following
//! segment is preceded by the rendering of its item:
//!
//! ```text
//! "a $ and $."  +  [usage "x", superscript "2"]
//!      ↓
//! "a " · "x" · " and " · <sup>2</sup> · "."
//! ```

use ordbok_core::article::{Content, Item};

use super::{RenderError, Renderer};
use crate::markup::{Element, Node};

impl Renderer<'_> {
    /// Interpolates `content` into markup nodes.
    ///
    /// # Errors
    ///
    /// Fails with [`RenderError::PlaceholderIndexMismatch`] when the number of
    /// placeholders differs from the number of items, and propagates item
    /// errors, including those of nested quote insets.
    pub(super) fn content(&self, content: &Content) -> Result<Vec<Node>, RenderError> {
        let placeholders = content.placeholder_count();
        let items = content.items();
        if placeholders != items.len() {
            return Err(RenderError::PlaceholderIndexMismatch {
                placeholders,
                items: items.len(),
            });
        }

        let mut segments = content.segments();
        let mut nodes = Vec::with_capacity(items.len() * 2 + 1);
        push_text(&mut nodes, segments.next().unwrap_or_default());

        for (item, segment) in items.iter().zip(segments) {
            nodes.extend(self.item(item)?);
            push_text(&mut nodes, segment);
        }

        Ok(nodes)
    }

    fn item(&self, item: &Item) -> Result<Vec<Node>, RenderError> {
        let node = match item {
            Item::ArticleRef(article_ref) => Node::text(article_ref.display_lemma()),
            Item::Usage { text } => Node::text(text.as_str()),
            Item::Concept { id, .. } => Node::text(self.concepts.resolve(id)?),
            Item::Superscript { text } => Element::new("sup").with_text(text.as_str()).into(),
            Item::Subscript { text } => Element::new("sub").with_text(text.as_str()).into(),
            Item::Fraction {
                numerator,
                denominator,
            } => Node::text(format!(
                "{}/{}",
                format_number(*numerator),
                format_number(*denominator)
            )),
            Item::QuoteInset(inset) => return self.content(inset),
        };
        Ok(vec![node])
    }
}

/// Formats a finite number the way JavaScript number-to-string does.
///
/// Zero loses its sign. Magnitudes from `1e-6` up to `1e21` print as plain
/// decimals, everything else in exponent form with an explicit sign
/// (`1e+21`, `1.5e-7`).
fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }
    let formatted = format!("{value:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}

fn push_text(nodes: &mut Vec<Node>, text: &str) {
    if !text.is_empty() {
        nodes.push(Node::text(text));
    }
}
