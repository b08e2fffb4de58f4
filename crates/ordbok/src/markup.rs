//! Abstract output markup.
//!
//! The renderer produces a tree of [`Node`]s instead of writing HTML text
//! directly. Serialization to HTML is a single final step ([`html`]), which
//! keeps escaping and formatting out of the rendering logic.

pub mod html;
mod node;

pub use node::{Element, Node};
