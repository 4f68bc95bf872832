//! Trait definitions for the transcript module.

use async_trait::async_trait;

use super::error::TranscriptError;
use super::types::Transcript;

/// A fetcher that can retrieve the transcript of an external video.
#[async_trait]
pub trait TranscriptFetcher: Send + Sync {
    /// Returns the name of this fetcher implementation.
    fn name(&self) -> &str;

    /// Fetches the transcript for `video_id`.
    ///
    /// `languages` is an ordered preference list of language codes; the
    /// first available match wins.
    async fn fetch(
        &self,
        video_id: &str,
        languages: &[String],
    ) -> Result<Transcript, TranscriptError>;
}
