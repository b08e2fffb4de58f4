//! Rendering of validated articles to markup.
//!
//! The renderer is a pure function of its inputs: article, concept table and
//! configuration. It either returns the complete markup for an article or a
//! [`RenderError`]; no partial output escapes a failed render.
//!
//! # Layout
//!
//! An article renders as, in order:
//!
//! ```text
//! <h3>       header: lemmas with homograph numerals
//! <div>      word class
//! <section>  etymology (only when present)
//! <h4> ...   definitions, then fixed expressions
//! ```

mod content;
mod definitions;
mod error;
mod etymology;
mod header;
mod word_class;

pub use error::RenderError;
pub use header::{MAX_HOMOGRAPH, roman_numeral};
pub use word_class::builtin_word_class;

use log::{debug, trace};

use ordbok_core::{article::Article, concept::ConceptTable};

use crate::{
    config::AppConfig,
    markup::{Element, Node},
};

/// Renders an article to a sequence of top-level markup nodes.
///
/// # Errors
///
/// Returns [`RenderError`] for an unknown concept id, a homograph number
/// above [`MAX_HOMOGRAPH`], or content whose placeholders do not match its
/// items.
pub fn render_article(
    article: &Article,
    concepts: &ConceptTable,
    config: &AppConfig,
) -> Result<Vec<Node>, RenderError> {
    Renderer::new(concepts, config).article(article)
}

/// Rendering context shared by the per-section renderers.
struct Renderer<'a> {
    concepts: &'a ConceptTable,
    config: &'a AppConfig,
}

impl<'a> Renderer<'a> {
    fn new(concepts: &'a ConceptTable, config: &'a AppConfig) -> Self {
        Self { concepts, config }
    }

    fn article(&self, article: &Article) -> Result<Vec<Node>, RenderError> {
        let body = article.body();

        let mut nodes = vec![
            header::header(article.lemmas())?.into(),
            self.word_class(article.primary_lemma()).into(),
        ];
        if let Some(etymology) = self.etymology(body.etymology())? {
            nodes.push(etymology.into());
        }
        nodes.extend(self.definitions(body.definition())?);

        debug!(article_id = article.article_id(), nodes = nodes.len(); "Article rendered");
        trace!(nodes:?; "Rendered markup");

        Ok(nodes)
    }
}

/// A heading element with a single text child.
fn heading(tag: &'static str, text: &str) -> Node {
    Element::new(tag).with_text(text).into()
}
