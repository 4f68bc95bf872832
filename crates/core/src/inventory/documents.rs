//! Directory scan for PDF documents.

use std::path::Path;
use tracing::{info, warn};

use crate::config::DocumentsConfig;
use crate::pipeline::DocumentItem;

use super::InventoryError;

/// Scan the configured directory (non-recursively) for `*.pdf` files.
///
/// If the primary directory does not exist the configured fallback is
/// tried; if that is also absent the scan yields an empty list. An absent
/// directory is a diagnostic, not an error — the run proceeds with zero
/// items.
pub fn scan_documents(config: &DocumentsConfig) -> Result<Vec<DocumentItem>, InventoryError> {
    let dir = if config.input_dir.is_dir() {
        config.input_dir.as_path()
    } else {
        warn!(
            "Documents directory not found: {}",
            config.input_dir.display()
        );
        match &config.fallback_dir {
            Some(fallback) if fallback.is_dir() => {
                info!("Falling back to {}", fallback.display());
                fallback.as_path()
            }
            Some(fallback) => {
                warn!(
                    "Fallback directory not found either: {}",
                    fallback.display()
                );
                return Ok(Vec::new());
            }
            None => return Ok(Vec::new()),
        }
    };

    let entries = std::fs::read_dir(dir).map_err(|e| InventoryError::ListFailed {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut items = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| InventoryError::ListFailed {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let path = entry.path();
        if path.is_file() && is_pdf(&path) {
            items.push(DocumentItem { source_path: path });
        }
    }

    info!("Found {} PDF files in {}", items.len(), dir.display());
    Ok(items)
}

fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn config_for(input: &Path, fallback: Option<&Path>) -> DocumentsConfig {
        DocumentsConfig {
            input_dir: input.to_path_buf(),
            fallback_dir: fallback.map(|p| p.to_path_buf()),
            output_dir: PathBuf::from("out"),
        }
    }

    #[test]
    fn test_scan_finds_only_pdfs() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("plan-a.pdf"), b"%PDF-1.4").unwrap();
        std::fs::write(temp.path().join("plan-b.PDF"), b"%PDF-1.4").unwrap();
        std::fs::write(temp.path().join("notes.txt"), b"not a pdf").unwrap();
        std::fs::create_dir(temp.path().join("nested.pdf")).unwrap();

        let items = scan_documents(&config_for(temp.path(), None)).unwrap();
        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|i| i.source_path.is_file()));
    }

    #[test]
    fn test_scan_is_not_recursive() {
        let temp = TempDir::new().unwrap();
        let sub = temp.path().join("sub");
        std::fs::create_dir(&sub).unwrap();
        std::fs::write(sub.join("inner.pdf"), b"%PDF-1.4").unwrap();

        let items = scan_documents(&config_for(temp.path(), None)).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_scan_falls_back_when_primary_missing() {
        let fallback = TempDir::new().unwrap();
        std::fs::write(fallback.path().join("plan.pdf"), b"%PDF-1.4").unwrap();

        let missing = fallback.path().join("does-not-exist");
        let items = scan_documents(&config_for(&missing, Some(fallback.path()))).unwrap();
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_scan_both_missing_yields_empty() {
        let temp = TempDir::new().unwrap();
        let missing_a = temp.path().join("a");
        let missing_b = temp.path().join("b");

        let items = scan_documents(&config_for(&missing_a, Some(&missing_b))).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_scan_missing_without_fallback_yields_empty() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("a");

        let items = scan_documents(&config_for(&missing, None)).unwrap();
        assert!(items.is_empty());
    }
}
