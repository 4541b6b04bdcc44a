//! Error types for Daygrid operations.
//!
//! This module provides the main error type [`DaygridError`] which wraps
//! the error conditions of each processing stage.

use std::io;

use thiserror::Error;

use crate::{export, layout::LayoutError, source::SourceError};

/// The main error type for Daygrid operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the document source next to the error, so the
/// error's span can be shown in context.
#[derive(Debug, Error)]
pub enum DaygridError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: SourceError, src: String },

    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("Export error: {0}")]
    Export(#[from] export::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DaygridError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: SourceError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
