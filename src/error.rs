//! Error types

use std::path::PathBuf;
use thiserror::Error;

/// A source file could not be parsed into a syntax tree.
///
/// Per-file: the engine reports it for the offending file and continues with
/// the rest of the run.
#[derive(Debug, Error)]
#[error("failed to parse {}: {message}", path.display())]
pub struct ParseError {
    pub path: PathBuf,
    pub message: String,
}

impl ParseError {
    pub fn new(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}
