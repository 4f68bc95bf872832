//! Pipeline runner implementation.

use tracing::{info, warn};

use crate::extractor::DocumentExtractor;
use crate::transcript::TranscriptFetcher;
use crate::writer::{OutputFile, TextWriter};

use super::report::RunReporter;
use super::types::{FailureReason, ItemOutcome, ItemReport, RunReport, WorkItem};

/// Runs a list of work items to completion, strictly sequentially.
///
/// Every processor and writer error is caught at this boundary and
/// downgraded to a recorded outcome; a run never aborts because an item
/// failed.
pub struct PipelineRunner<E: DocumentExtractor, F: TranscriptFetcher> {
    extractor: E,
    fetcher: F,
    languages: Vec<String>,
}

impl<E: DocumentExtractor, F: TranscriptFetcher> PipelineRunner<E, F> {
    /// Creates a new runner.
    ///
    /// `languages` is the transcript language preference list, tried in
    /// order for every transcript item.
    pub fn new(extractor: E, fetcher: F, languages: Vec<String>) -> Self {
        Self {
            extractor,
            fetcher,
            languages,
        }
    }

    /// Processes all items in order, writing successful output through
    /// `writer`, and returns the per-item reports plus the final tally.
    pub async fn run(&self, items: Vec<WorkItem>, writer: &TextWriter) -> RunReport {
        let mut reporter = RunReporter::new(items.len());
        let mut reports = Vec::with_capacity(items.len());

        for item in items {
            let label = item.label();
            let outcome = self.process_item(&item, writer).await;
            reporter.observe(&label, &outcome);
            reports.push(ItemReport { label, outcome });
        }

        RunReport {
            items: reports,
            summary: reporter.finish(),
        }
    }

    /// Process one item end to end: produce text, then persist it.
    async fn process_item(&self, item: &WorkItem, writer: &TextWriter) -> ItemOutcome {
        let text = match self.produce_text(item).await {
            Ok(text) => text,
            Err(reason) => return ItemOutcome::Failed { reason },
        };

        let file = OutputFile::new(item.output_file_name(), text);
        match writer.write(&file).await {
            Ok(path) => ItemOutcome::Written { path },
            Err(e) => {
                warn!("Failed to write {}: {}", file.file_name, e);
                ItemOutcome::Failed {
                    reason: FailureReason::Unknown(e.to_string()),
                }
            }
        }
    }

    async fn produce_text(&self, item: &WorkItem) -> Result<String, FailureReason> {
        match item {
            WorkItem::Document(doc) => {
                info!("Processing {}", doc.source_path.display());
                match self.extractor.extract(&doc.source_path).await {
                    Ok(extracted) => {
                        if !extracted.failed_pages.is_empty() {
                            warn!(
                                source = %doc.source_path.display(),
                                failed_pages = extracted.failed_pages.len(),
                                "Some pages could not be extracted"
                            );
                        }
                        Ok(extracted.plain_text())
                    }
                    Err(e) => {
                        warn!("Failed to read {}: {}", doc.source_path.display(), e);
                        Err(e.into())
                    }
                }
            }
            WorkItem::Transcript(t) => {
                info!("Downloading transcript: {} - {}", t.party, t.candidate);
                match self.fetcher.fetch(&t.video_id, &self.languages).await {
                    Ok(transcript) => Ok(transcript.plain_text()),
                    Err(e) => {
                        warn!(video_id = %t.video_id, "Transcript download failed: {}", e);
                        Err(e.into())
                    }
                }
            }
        }
    }
}
