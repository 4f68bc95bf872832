//! Input enumeration.
//!
//! Produces the ordered, finite list of work items for a run: the `*.pdf`
//! files found in the configured documents directory, and the candidate
//! roster loaded from its TOML data file.

mod documents;
mod roster;

pub use documents::scan_documents;
pub use roster::{load_roster, CandidateEntry, Roster};

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while enumerating inputs.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// Roster file not found.
    #[error("Roster file not found: {path}")]
    RosterNotFound { path: PathBuf },

    /// Failed to read the roster file.
    #[error("Failed to read roster file: {path}")]
    RosterReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the roster file.
    #[error("Failed to parse roster file {path}: {reason}")]
    RosterParseFailed { path: PathBuf, reason: String },

    /// Failed to list a directory that exists.
    #[error("Failed to list directory: {path}")]
    ListFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
