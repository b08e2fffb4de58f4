//! Dictionary article document model.
//!
//! This module contains the validated representation of a dictionary article.
//! The tree is built once by the validator and then only read.
//!
//! # Pipeline Position
//!
//! ```text
//! Stored JSON document
//!     ↓ ordbok-validate
//! Article (these types) - shape checked, tags resolved to variants
//!     ↓ ordbok::render (+ ConceptTable)
//! Markup nodes
//!     ↓ serialize
//! HTML
//! ```
//!
//! # Organization
//!
//! - [`entry`] - Top-level structures: [`Article`], [`Lemma`], [`Body`], [`EtymologyEntry`]
//! - [`definition`] - The sense tree: [`Definition`], [`DefinitionElement`], [`Example`], etc.
//! - [`item`] - Inline content: [`Content`] and the [`Item`] variants it interpolates

pub mod definition;
pub mod entry;
pub mod item;

pub use definition::*;
pub use entry::*;
pub use item::*;
