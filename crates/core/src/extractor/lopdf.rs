//! lopdf extraction backend implementation.

use async_trait::async_trait;
use lopdf::Document;
use std::path::{Path, PathBuf};
use tokio::task;
use tracing::{debug, warn};

use super::error::ExtractError;
use super::traits::DocumentExtractor;
use super::types::{ExtractedDocument, PageText};

/// PDF text extraction backend built on `lopdf`.
///
/// Pages are extracted one at a time so a single corrupt page does not
/// lose the rest of the document.
#[derive(Debug, Default)]
pub struct LopdfExtractor;

impl LopdfExtractor {
    /// Creates a new lopdf extractor.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DocumentExtractor for LopdfExtractor {
    fn name(&self) -> &str {
        "lopdf"
    }

    async fn extract(&self, path: &Path) -> Result<ExtractedDocument, ExtractError> {
        if !path.exists() {
            return Err(ExtractError::SourceMissing {
                path: path.to_path_buf(),
            });
        }

        // Parsing is CPU-bound; keep it off the async runtime.
        let owned = path.to_path_buf();
        task::spawn_blocking(move || extract_sync(owned))
            .await
            .map_err(|e| ExtractError::TaskFailed(e.to_string()))?
    }

    async fn validate(&self) -> Result<(), ExtractError> {
        // The parser is compiled in; nothing external to probe.
        Ok(())
    }
}

fn extract_sync(path: PathBuf) -> Result<ExtractedDocument, ExtractError> {
    let doc = Document::load(&path).map_err(|e| ExtractError::Unreadable {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    if doc.is_encrypted() {
        return Err(ExtractError::Encrypted { path });
    }

    let page_numbers: Vec<u32> = doc.get_pages().keys().copied().collect();
    debug!(
        source = %path.display(),
        pages = page_numbers.len(),
        "Extracting document text"
    );

    let mut pages = Vec::with_capacity(page_numbers.len());
    let mut failed_pages = Vec::new();

    for number in page_numbers {
        match doc.extract_text(&[number]) {
            Ok(text) => pages.push(PageText { number, text }),
            Err(e) => {
                warn!(
                    source = %path.display(),
                    page = number,
                    "Failed to extract page text: {}",
                    e
                );
                failed_pages.push(number);
                pages.push(PageText {
                    number,
                    text: String::new(),
                });
            }
        }
    }

    Ok(ExtractedDocument {
        source: path,
        pages,
        failed_pages,
    })
}
