//! Types for the extractor module.

use std::path::PathBuf;

/// Text extracted from one page.
#[derive(Debug, Clone)]
pub struct PageText {
    /// Page number (1-indexed).
    pub number: u32,
    /// Extracted text; empty when extraction of this page failed.
    pub text: String,
}

/// The result of extracting a whole document.
#[derive(Debug, Clone)]
pub struct ExtractedDocument {
    /// The document the text came from.
    pub source: PathBuf,
    /// All pages in document order, failed pages included with empty text.
    pub pages: Vec<PageText>,
    /// Page numbers whose extraction failed.
    pub failed_pages: Vec<u32>,
}

impl ExtractedDocument {
    /// Concatenates the page texts, each followed by a newline.
    ///
    /// A failed page contributes only its separator, so the surviving
    /// pages keep their original order and spacing.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for page in &self.pages {
            out.push_str(&page.text);
            out.push('\n');
        }
        out
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}
