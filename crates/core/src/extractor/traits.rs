//! Trait definitions for the extractor module.

use async_trait::async_trait;
use std::path::Path;

use super::error::ExtractError;
use super::types::ExtractedDocument;

/// An extractor that can pull raw text out of a source document.
#[async_trait]
pub trait DocumentExtractor: Send + Sync {
    /// Returns the name of this extractor implementation.
    fn name(&self) -> &str;

    /// Extracts the text of every page of the document at `path`.
    ///
    /// A per-page failure does not fail the call; the page is reported in
    /// `failed_pages` and contributes empty text. Only a document that
    /// cannot be opened at all returns an error.
    async fn extract(&self, path: &Path) -> Result<ExtractedDocument, ExtractError>;

    /// Validates that the extractor is ready to use.
    ///
    /// Called once at startup; a failure here is fatal for the documents
    /// pipeline before any item is processed.
    async fn validate(&self) -> Result<(), ExtractError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    struct FixedExtractor;

    #[async_trait]
    impl DocumentExtractor for FixedExtractor {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn extract(&self, path: &Path) -> Result<ExtractedDocument, ExtractError> {
            Ok(ExtractedDocument {
                source: path.to_path_buf(),
                pages: vec![super::super::types::PageText {
                    number: 1,
                    text: "page one".to_string(),
                }],
                failed_pages: vec![],
            })
        }

        async fn validate(&self) -> Result<(), ExtractError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_fixed_extractor_extract() {
        let extractor = FixedExtractor;
        let doc = extractor.extract(Path::new("/test/plan.pdf")).await.unwrap();
        assert_eq!(doc.source, PathBuf::from("/test/plan.pdf"));
        assert_eq!(doc.plain_text(), "page one\n");
    }

    #[tokio::test]
    async fn test_fixed_extractor_validate() {
        let extractor = FixedExtractor;
        assert!(extractor.validate().await.is_ok());
        assert_eq!(extractor.name(), "fixed");
    }
}
