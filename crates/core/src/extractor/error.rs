//! Error types for the extractor module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during document text extraction.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Source file not found.
    #[error("Source document not found: {path}")]
    SourceMissing { path: PathBuf },

    /// The document could not be opened or parsed.
    #[error("Unreadable document {path}: {reason}")]
    Unreadable { path: PathBuf, reason: String },

    /// The document is encrypted and cannot be read without a password.
    #[error("Encrypted document: {path}")]
    Encrypted { path: PathBuf },

    /// The blocking extraction task failed to complete.
    #[error("Extraction task failed: {0}")]
    TaskFailed(String),
}
