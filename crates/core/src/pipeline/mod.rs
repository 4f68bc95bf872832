//! Batch pipeline runner and reporting.
//!
//! A run is a single, strictly sequential pass over a list of work items:
//! each item is processed by its external capability, successful text is
//! persisted, and every outcome — success or typed failure — is recorded.
//! No per-item failure ever aborts the run.

mod report;
mod runner;
mod types;

pub use report::RunReporter;
pub use runner::PipelineRunner;
pub use types::{
    candidate_slug, DocumentItem, FailureReason, ItemOutcome, ItemReport, RunReport, RunSummary,
    TranscriptItem, WorkItem,
};
