//! Types for the transcript module.

/// One timed caption entry.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptEntry {
    /// Caption text, entities decoded and markup stripped.
    pub text: String,
    /// Offset of the entry from the start of the video, in seconds.
    pub start_secs: f64,
    /// Duration the entry stays on screen, in seconds.
    pub duration_secs: f64,
}

/// A downloaded transcript.
#[derive(Debug, Clone)]
pub struct Transcript {
    /// The external video id the transcript belongs to.
    pub video_id: String,
    /// Language code of the track that was actually retrieved.
    pub language_code: String,
    /// Entries in playback order.
    pub entries: Vec<TranscriptEntry>,
}

impl Transcript {
    /// Joins the entry texts with newlines.
    pub fn plain_text(&self) -> String {
        self.entries
            .iter()
            .map(|e| e.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(text: &str, start_secs: f64) -> TranscriptEntry {
        TranscriptEntry {
            text: text.to_string(),
            start_secs,
            duration_secs: 2.0,
        }
    }

    #[test]
    fn test_plain_text_joins_entries() {
        let transcript = Transcript {
            video_id: "abc123".to_string(),
            language_code: "es".to_string(),
            entries: vec![entry("buenas tardes", 0.0), entry("muchas gracias", 2.0)],
        };
        assert_eq!(transcript.plain_text(), "buenas tardes\nmuchas gracias");
    }

    #[test]
    fn test_plain_text_empty_transcript() {
        let transcript = Transcript {
            video_id: "abc123".to_string(),
            language_code: "es".to_string(),
            entries: vec![],
        };
        assert_eq!(transcript.plain_text(), "");
    }
}
