//! Error types for the transcript module.

use thiserror::Error;

/// Errors that can occur while retrieving a transcript.
#[derive(Debug, Error)]
pub enum TranscriptError {
    /// The video itself is not reachable.
    #[error("Video unavailable: {video_id}")]
    VideoUnavailable { video_id: String },

    /// Transcripts are explicitly disabled for the video.
    #[error("Transcripts are disabled for video: {video_id}")]
    TranscriptsDisabled { video_id: String },

    /// No transcript exists in any of the preferred languages.
    #[error("No transcript found for video {video_id} in languages {languages:?}")]
    NoTranscriptFound {
        video_id: String,
        languages: Vec<String>,
    },

    /// The request timed out.
    #[error("Transcript request timed out")]
    Timeout,

    /// Could not connect to the remote service.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The remote service answered, but not usefully.
    #[error("Transcript fetch failed: {0}")]
    FetchFailed(String),

    /// The response could not be parsed.
    #[error("Failed to parse transcript data: {0}")]
    ParseFailed(String),
}
