//! File system text writer implementation.

use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use super::error::WriteError;
use super::types::OutputFile;

/// Writes text files into a single output directory.
pub struct TextWriter {
    output_dir: PathBuf,
}

impl TextWriter {
    /// Creates a writer targeting the given output directory.
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// The directory files are written into.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Persists an output file, overwriting any existing file at the
    /// derived path. Creates the output directory if absent; safe to call
    /// every run.
    pub async fn write(&self, file: &OutputFile) -> Result<PathBuf, WriteError> {
        fs::create_dir_all(&self.output_dir).await.map_err(|e| {
            WriteError::DirectoryCreationFailed {
                path: self.output_dir.clone(),
                source: e,
            }
        })?;

        let path = self.output_dir.join(&file.file_name);
        fs::write(&path, file.content.as_bytes())
            .await
            .map_err(|e| WriteError::WriteFailed {
                path: path.clone(),
                source: e,
            })?;

        debug!(path = %path.display(), bytes = file.content.len(), "Wrote output file");
        Ok(path)
    }
}
