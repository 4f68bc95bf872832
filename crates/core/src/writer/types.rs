//! Types for the writer module.

/// A text file ready to be persisted.
#[derive(Debug, Clone)]
pub struct OutputFile {
    /// File name within the output directory, derived from the work item.
    pub file_name: String,
    /// UTF-8 content.
    pub content: String,
}

impl OutputFile {
    /// Creates a new output file.
    pub fn new(file_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
        }
    }
}
