//! Mock document extractor for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::extractor::{DocumentExtractor, ExtractError, ExtractedDocument, PageText};

/// Mock implementation of the DocumentExtractor trait.
///
/// Provides controllable behavior for testing:
/// - Return configured page texts per source path
/// - Track extracted paths for assertions
/// - Inject a one-shot error
///
/// A path with no configured document fails with `SourceMissing`.
#[derive(Clone, Default)]
pub struct MockExtractor {
    documents: Arc<RwLock<HashMap<PathBuf, Vec<PageText>>>>,
    extractions: Arc<RwLock<Vec<PathBuf>>>,
    next_error: Arc<RwLock<Option<ExtractError>>>,
}

impl MockExtractor {
    /// Create a new mock extractor with no configured documents.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure the pages returned for a source path.
    ///
    /// An empty string marks a page whose extraction "failed": it is
    /// reported in `failed_pages` and contributes empty text, like the
    /// production backend.
    pub async fn set_pages(&self, path: impl Into<PathBuf>, pages: Vec<&str>) {
        let pages = pages
            .into_iter()
            .enumerate()
            .map(|(i, text)| PageText {
                number: i as u32 + 1,
                text: text.to_string(),
            })
            .collect();
        self.documents.write().await.insert(path.into(), pages);
    }

    /// Configure the next extraction to fail with the given error.
    pub async fn set_next_error(&self, error: ExtractError) {
        *self.next_error.write().await = Some(error);
    }

    /// Paths extracted so far, in call order.
    pub async fn recorded_extractions(&self) -> Vec<PathBuf> {
        self.extractions.read().await.clone()
    }

    /// Number of extractions performed.
    pub async fn extraction_count(&self) -> usize {
        self.extractions.read().await.len()
    }
}

#[async_trait]
impl DocumentExtractor for MockExtractor {
    fn name(&self) -> &str {
        "mock"
    }

    async fn extract(&self, path: &Path) -> Result<ExtractedDocument, ExtractError> {
        if let Some(err) = self.next_error.write().await.take() {
            return Err(err);
        }

        self.extractions.write().await.push(path.to_path_buf());

        let documents = self.documents.read().await;
        let pages = documents
            .get(path)
            .cloned()
            .ok_or_else(|| ExtractError::SourceMissing {
                path: path.to_path_buf(),
            })?;

        let failed_pages = pages
            .iter()
            .filter(|p| p.text.is_empty())
            .map(|p| p.number)
            .collect();

        Ok(ExtractedDocument {
            source: path.to_path_buf(),
            pages,
            failed_pages,
        })
    }

    async fn validate(&self) -> Result<(), ExtractError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_configured_document() {
        let extractor = MockExtractor::new();
        extractor.set_pages("/planes/a.pdf", vec!["Hello", "World"]).await;

        let doc = extractor.extract(Path::new("/planes/a.pdf")).await.unwrap();
        assert_eq!(doc.plain_text(), "Hello\nWorld\n");
        assert!(doc.failed_pages.is_empty());
    }

    #[tokio::test]
    async fn test_empty_page_marked_failed() {
        let extractor = MockExtractor::new();
        extractor
            .set_pages("/planes/a.pdf", vec!["Hello", "", "World"])
            .await;

        let doc = extractor.extract(Path::new("/planes/a.pdf")).await.unwrap();
        assert_eq!(doc.failed_pages, vec![2]);
        assert_eq!(doc.plain_text(), "Hello\n\nWorld\n");
    }

    #[tokio::test]
    async fn test_unknown_path_is_missing() {
        let extractor = MockExtractor::new();
        let result = extractor.extract(Path::new("/planes/unknown.pdf")).await;
        assert!(matches!(result, Err(ExtractError::SourceMissing { .. })));
    }

    #[tokio::test]
    async fn test_error_injection_is_one_shot() {
        let extractor = MockExtractor::new();
        extractor.set_pages("/planes/a.pdf", vec!["Hello"]).await;
        extractor
            .set_next_error(ExtractError::Unreadable {
                path: PathBuf::from("/planes/a.pdf"),
                reason: "injected".to_string(),
            })
            .await;

        let result = extractor.extract(Path::new("/planes/a.pdf")).await;
        assert!(result.is_err());

        // Error should be consumed
        let result = extractor.extract(Path::new("/planes/a.pdf")).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_recorded_extractions() {
        let extractor = MockExtractor::new();
        extractor.set_pages("/planes/a.pdf", vec!["a"]).await;
        extractor.set_pages("/planes/b.pdf", vec!["b"]).await;

        extractor.extract(Path::new("/planes/a.pdf")).await.unwrap();
        extractor.extract(Path::new("/planes/b.pdf")).await.unwrap();

        let recorded = extractor.recorded_extractions().await;
        assert_eq!(recorded.len(), 2);
        assert_eq!(recorded[0], PathBuf::from("/planes/a.pdf"));
        assert_eq!(extractor.extraction_count().await, 2);
    }
}
