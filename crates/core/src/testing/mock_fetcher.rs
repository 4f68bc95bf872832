//! Mock transcript fetcher for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::transcript::{Transcript, TranscriptEntry, TranscriptError, TranscriptFetcher};

/// A recorded fetch for test assertions.
#[derive(Debug, Clone)]
pub struct RecordedFetch {
    /// The video id that was requested.
    pub video_id: String,
    /// The language preference list that was passed.
    pub languages: Vec<String>,
}

/// Mock implementation of the TranscriptFetcher trait.
///
/// Provides controllable behavior for testing:
/// - Return configured transcripts per video id
/// - Track fetches for assertions
/// - Inject a one-shot error
///
/// A video id with no configured transcript fails with
/// `NoTranscriptFound`.
#[derive(Clone, Default)]
pub struct MockFetcher {
    transcripts: Arc<RwLock<HashMap<String, Transcript>>>,
    fetches: Arc<RwLock<Vec<RecordedFetch>>>,
    next_error: Arc<RwLock<Option<TranscriptError>>>,
}

impl MockFetcher {
    /// Create a new mock fetcher with no configured transcripts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure a transcript whose entries are the given lines.
    pub async fn set_transcript(&self, video_id: &str, lines: Vec<&str>) {
        let entries = lines
            .into_iter()
            .enumerate()
            .map(|(i, text)| TranscriptEntry {
                text: text.to_string(),
                start_secs: i as f64 * 2.0,
                duration_secs: 2.0,
            })
            .collect();
        let transcript = Transcript {
            video_id: video_id.to_string(),
            language_code: "es".to_string(),
            entries,
        };
        self.transcripts
            .write()
            .await
            .insert(video_id.to_string(), transcript);
    }

    /// Configure the next fetch to fail with the given error.
    pub async fn set_next_error(&self, error: TranscriptError) {
        *self.next_error.write().await = Some(error);
    }

    /// Fetches performed so far, in call order.
    pub async fn recorded_fetches(&self) -> Vec<RecordedFetch> {
        self.fetches.read().await.clone()
    }

    /// Number of fetches performed.
    pub async fn fetch_count(&self) -> usize {
        self.fetches.read().await.len()
    }
}

#[async_trait]
impl TranscriptFetcher for MockFetcher {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch(
        &self,
        video_id: &str,
        languages: &[String],
    ) -> Result<Transcript, TranscriptError> {
        if let Some(err) = self.next_error.write().await.take() {
            return Err(err);
        }

        self.fetches.write().await.push(RecordedFetch {
            video_id: video_id.to_string(),
            languages: languages.to_vec(),
        });

        self.transcripts
            .read()
            .await
            .get(video_id)
            .cloned()
            .ok_or_else(|| TranscriptError::NoTranscriptFound {
                video_id: video_id.to_string(),
                languages: languages.to_vec(),
            })
    }
}
