//! Error types for the CLI.

use std::io;

use thiserror::Error;

use ordbok::OrdbokError;

use crate::config::ConfigError;

/// Errors reported by the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Ordbok(#[from] OrdbokError),

    /// A single article failed; the batch carried on without it.
    #[error("Article {article_id}: {err}")]
    Article { article_id: u64, err: OrdbokError },

    #[error("{} of {total} article(s) failed: {failed:?}", .failed.len())]
    Batch { failed: Vec<u64>, total: usize },
}
