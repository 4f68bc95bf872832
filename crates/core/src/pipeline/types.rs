//! Types for the pipeline module.

use std::fmt;
use std::path::PathBuf;

use crate::extractor::ExtractError;
use crate::inventory::CandidateEntry;
use crate::transcript::TranscriptError;

/// A PDF document to extract.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentItem {
    /// Path of the source file, as enumerated.
    pub source_path: PathBuf,
}

/// A candidate transcript to download.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptItem {
    /// Party code (e.g., "PLN").
    pub party: String,
    /// Candidate full name, as published.
    pub candidate: String,
    /// Opaque external video id; assumed valid, never validated.
    pub video_id: String,
}

impl From<CandidateEntry> for TranscriptItem {
    fn from(entry: CandidateEntry) -> Self {
        Self {
            party: entry.party,
            candidate: entry.name,
            video_id: entry.video_id,
        }
    }
}

/// One unit of input, processed into one output text file.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkItem {
    Document(DocumentItem),
    Transcript(TranscriptItem),
}

impl WorkItem {
    /// Short human-readable identity used in progress lines.
    pub fn label(&self) -> String {
        match self {
            WorkItem::Document(d) => d
                .source_path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| d.source_path.display().to_string()),
            WorkItem::Transcript(t) => format!("{} - {}", t.party, t.candidate),
        }
    }

    /// Deterministic output file name for this item.
    ///
    /// Documents keep their base name with a `.txt` extension; transcripts
    /// are named `{party}-{candidate-slug}.txt`.
    pub fn output_file_name(&self) -> String {
        match self {
            WorkItem::Document(d) => {
                let stem = d
                    .source_path
                    .file_stem()
                    .map(|s| s.to_string_lossy().to_string())
                    .unwrap_or_else(|| "document".to_string());
                format!("{}.txt", stem)
            }
            WorkItem::Transcript(t) => {
                format!("{}-{}.txt", t.party, candidate_slug(&t.candidate))
            }
        }
    }
}

/// Lowercases a candidate name and maps it to a file-name-safe slug:
/// Spanish diacritics become their ASCII base letters, spaces become `-`.
pub fn candidate_slug(name: &str) -> String {
    name.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' => 'a',
            'é' => 'e',
            'í' => 'i',
            'ó' => 'o',
            'ú' => 'u',
            'ü' => 'u',
            'ñ' => 'n',
            ' ' => '-',
            other => other,
        })
        .collect()
}

/// Why an item failed.
#[derive(Debug, Clone, PartialEq)]
pub enum FailureReason {
    /// Source file disappeared between enumeration and processing.
    SourceMissing,
    /// The source document could not be opened or parsed.
    SourceUnreadable,
    /// The remote video is not reachable.
    RemoteUnavailable,
    /// Transcripts are explicitly disabled for the video.
    RemoteDisabled,
    /// No transcript exists in any preferred language.
    RemoteContentMissing,
    /// Anything else; the underlying message is kept for reporting only.
    Unknown(String),
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::SourceMissing => write!(f, "source file missing"),
            FailureReason::SourceUnreadable => write!(f, "source document unreadable"),
            FailureReason::RemoteUnavailable => write!(f, "video unavailable"),
            FailureReason::RemoteDisabled => write!(f, "transcripts disabled"),
            FailureReason::RemoteContentMissing => {
                write!(f, "no transcript in preferred languages")
            }
            FailureReason::Unknown(msg) => write!(f, "unexpected failure: {}", msg),
        }
    }
}

impl From<ExtractError> for FailureReason {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::SourceMissing { .. } => FailureReason::SourceMissing,
            ExtractError::Unreadable { .. } | ExtractError::Encrypted { .. } => {
                FailureReason::SourceUnreadable
            }
            ExtractError::TaskFailed(msg) => FailureReason::Unknown(msg),
        }
    }
}

impl From<TranscriptError> for FailureReason {
    fn from(err: TranscriptError) -> Self {
        match err {
            TranscriptError::VideoUnavailable { .. } => FailureReason::RemoteUnavailable,
            TranscriptError::TranscriptsDisabled { .. } => FailureReason::RemoteDisabled,
            TranscriptError::NoTranscriptFound { .. } => FailureReason::RemoteContentMissing,
            other => FailureReason::Unknown(other.to_string()),
        }
    }
}

/// The terminal state of one item.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemOutcome {
    /// Text was produced and persisted.
    Written { path: PathBuf },
    /// Processing or persistence failed; nothing was written.
    Failed { reason: FailureReason },
}

impl ItemOutcome {
    /// Whether the item succeeded.
    pub fn is_success(&self) -> bool {
        matches!(self, ItemOutcome::Written { .. })
    }
}

/// One item's recorded result.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemReport {
    /// The item's label at processing time.
    pub label: String,
    /// What happened to it.
    pub outcome: ItemOutcome,
}

/// Final tally of a run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Items enumerated.
    pub total: usize,
    /// Items written.
    pub successful: usize,
    /// Items that failed for any reason.
    pub failed: usize,
    /// Wall-clock duration of the run.
    pub duration_ms: u64,
}

/// Everything a run produced, in arrival order.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Per-item results.
    pub items: Vec<ItemReport>,
    /// The final tally.
    pub summary: RunSummary,
}
