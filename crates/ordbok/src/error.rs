//! Error types for Ordbok operations.
//!
//! This module provides the main error type [`OrdbokError`] which wraps
//! the error conditions of every pipeline stage.

use std::io;

use thiserror::Error;

use ordbok_core::concept::ConceptTableError;
use ordbok_validate::ValidationError;

use crate::render::RenderError;

/// The main error type for Ordbok operations.
///
/// The `Validation` variant carries every structural diagnostic with its
/// JSON path, for rich error reporting.
#[derive(Debug, Error)]
pub enum OrdbokError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Concept table error: {0}")]
    Concepts(#[from] ConceptTableError),
}
