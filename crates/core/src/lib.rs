pub mod config;
pub mod extractor;
pub mod inventory;
pub mod pipeline;
pub mod testing;
pub mod transcript;
pub mod writer;

pub use config::{
    load_config, load_config_from_str, load_config_or_default, validate_config, Config,
    ConfigError, DocumentsConfig, TranscriptsConfig,
};
pub use extractor::{DocumentExtractor, ExtractError, ExtractedDocument, LopdfExtractor, PageText};
pub use inventory::{load_roster, scan_documents, CandidateEntry, InventoryError, Roster};
pub use pipeline::{
    DocumentItem, FailureReason, ItemOutcome, ItemReport, PipelineRunner, RunReport, RunReporter,
    RunSummary, TranscriptItem, WorkItem,
};
pub use transcript::{
    Transcript, TranscriptEntry, TranscriptError, TranscriptFetcher, YoutubeFetcher,
};
pub use writer::{OutputFile, TextWriter, WriteError};
