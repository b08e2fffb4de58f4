//! CLI logic for the Ordbok article renderer.
//!
//! Renders a batch of stored articles to HTML entries. Each article is
//! processed independently: a failing article is reported and counted, and
//! the rest of the batch still renders.

pub mod error_adapter;

mod args;
mod config;
mod error;

pub use args::Args;
pub use config::ConfigError;
pub use error::CliError;

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info, warn};

use ordbok::{EntryBuilder, OrdbokError, concept::ConceptTable};

/// Run the Ordbok CLI application
///
/// Loads the configuration and concept table, then renders every requested
/// article from `{articles_dir}/{id}.json` to `{entries_dir}/{id}.html`.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `CliError` for:
/// - Configuration loading errors
/// - Concept table loading errors
/// - Failure to create the entries directory
/// - [`CliError::Batch`] when at least one article failed
pub fn run(args: &Args) -> Result<(), CliError> {
    let app_config = config::load_config(args.config.as_ref())?;

    let paths = app_config.paths();
    let articles_dir = args
        .articles_dir
        .clone()
        .unwrap_or_else(|| paths.articles().to_path_buf());
    let entries_dir = args
        .entries_dir
        .clone()
        .unwrap_or_else(|| paths.entries().to_path_buf());
    let concepts_path = args
        .concepts
        .clone()
        .unwrap_or_else(|| paths.concepts().to_path_buf());

    info!(
        articles = args.article_ids.len(),
        articles_dir = articles_dir.display().to_string(),
        entries_dir = entries_dir.display().to_string();
        "Processing articles"
    );

    let concepts = load_concepts(&concepts_path)?;
    fs::create_dir_all(&entries_dir)?;

    let builder = EntryBuilder::new(app_config, concepts);

    let mut failed = Vec::new();
    for &article_id in &args.article_ids {
        match render_entry(&builder, article_id, &articles_dir, &entries_dir) {
            Ok(output) => {
                info!(article_id, output_file = output.display().to_string(); "Entry written");
            }
            Err(err) => {
                warn!(article_id; "Article failed");
                error_adapter::report(&CliError::Article { article_id, err });
                failed.push(article_id);
            }
        }
    }

    if failed.is_empty() {
        info!(articles = args.article_ids.len(); "All entries rendered");
        Ok(())
    } else {
        Err(CliError::Batch {
            failed,
            total: args.article_ids.len(),
        })
    }
}

fn load_concepts(path: &Path) -> Result<ConceptTable, OrdbokError> {
    info!(path = path.display().to_string(); "Loading concept table");
    let json = fs::read_to_string(path)?;
    let concepts = ConceptTable::from_json(&json)?;
    debug!(concepts = concepts.len(); "Concept table loaded");
    Ok(concepts)
}

/// Validates, renders and writes a single article, returning the output path.
///
/// Nothing is written unless the whole article renders.
fn render_entry(
    builder: &EntryBuilder,
    article_id: u64,
    articles_dir: &Path,
    entries_dir: &Path,
) -> Result<PathBuf, OrdbokError> {
    let input = articles_dir.join(format!("{article_id}.json"));
    debug!(article_id, input_file = input.display().to_string(); "Reading article");

    let json = fs::read_to_string(&input)?;
    let article = builder.parse(&json)?;
    let html = builder.render_html(&article)?;

    let output = entries_dir.join(format!("{article_id}.html"));
    fs::write(&output, html)?;

    Ok(output)
}
