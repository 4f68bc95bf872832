//! YouTube transcript backend implementation.
//!
//! Retrieval works the way the site's own player does: fetch the watch
//! page, lift the caption track list out of the embedded player response,
//! pick a track by language preference and download its timed-text XML.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::config::TranscriptsConfig;

use super::error::TranscriptError;
use super::traits::TranscriptFetcher;
use super::types::{Transcript, TranscriptEntry};

const WATCH_URL: &str = "https://www.youtube.com/watch";

/// YouTube transcript backend.
pub struct YoutubeFetcher {
    client: Client,
}

impl YoutubeFetcher {
    /// Create a new YoutubeFetcher with the given configuration.
    pub fn new(config: &TranscriptsConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs as u64))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// GET a URL and return its body, with transport errors mapped to the
    /// transcript error taxonomy.
    async fn get_text(&self, url: &str) -> Result<String, TranscriptError> {
        let response = self
            .client
            .get(url)
            // A stable page language keeps the player response parseable.
            .header("Accept-Language", "en-US")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TranscriptError::Timeout
                } else if e.is_connect() {
                    TranscriptError::ConnectionFailed(e.to_string())
                } else {
                    TranscriptError::FetchFailed(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TranscriptError::FetchFailed(format!(
                "HTTP {}: {}",
                status,
                body.chars().take(200).collect::<String>()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| TranscriptError::FetchFailed(e.to_string()))
    }
}

#[async_trait]
impl TranscriptFetcher for YoutubeFetcher {
    fn name(&self) -> &str {
        "youtube"
    }

    async fn fetch(
        &self,
        video_id: &str,
        languages: &[String],
    ) -> Result<Transcript, TranscriptError> {
        let url = format!("{}?v={}", WATCH_URL, urlencoding::encode(video_id));
        debug!(video_id = video_id, "Fetching watch page");
        let html = self.get_text(&url).await?;

        let tracks = parse_caption_tracks(&html, video_id)?;
        let track =
            select_track(&tracks, languages).ok_or_else(|| TranscriptError::NoTranscriptFound {
                video_id: video_id.to_string(),
                languages: languages.to_vec(),
            })?;

        debug!(
            video_id = video_id,
            language = %track.language_code,
            generated = track.is_generated(),
            "Selected caption track"
        );

        let xml = self.get_text(&track.base_url).await?;
        let entries = parse_timed_text(&xml);

        debug!(
            video_id = video_id,
            entries = entries.len(),
            "Transcript download complete"
        );

        Ok(Transcript {
            video_id: video_id.to_string(),
            language_code: track.language_code.clone(),
            entries,
        })
    }
}

// Player response fragments we care about
#[derive(Debug, Deserialize)]
struct CaptionsBlob {
    #[serde(rename = "playerCaptionsTracklistRenderer")]
    renderer: Option<TracklistRenderer>,
}

#[derive(Debug, Deserialize)]
struct TracklistRenderer {
    #[serde(rename = "captionTracks", default)]
    caption_tracks: Vec<CaptionTrack>,
}

#[derive(Debug, Deserialize)]
struct CaptionTrack {
    #[serde(rename = "baseUrl")]
    base_url: String,
    #[serde(rename = "languageCode")]
    language_code: String,
    #[serde(default)]
    kind: Option<String>,
}

impl CaptionTrack {
    /// Whether the track is auto-generated rather than manually created.
    fn is_generated(&self) -> bool {
        self.kind.as_deref() == Some("asr")
    }
}

/// Pull the caption track list out of a watch page.
fn parse_caption_tracks(
    html: &str,
    video_id: &str,
) -> Result<Vec<CaptionTrack>, TranscriptError> {
    let Some(idx) = html.find("\"captions\":") else {
        // No caption data at all. Distinguish a dead video from one that
        // simply has captions turned off.
        if !html.contains("\"playabilityStatus\":") {
            return Err(TranscriptError::VideoUnavailable {
                video_id: video_id.to_string(),
            });
        }
        return Err(TranscriptError::TranscriptsDisabled {
            video_id: video_id.to_string(),
        });
    };

    let after = &html[idx + "\"captions\":".len()..];
    let blob = after.split(",\"videoDetails\"").next().unwrap_or(after);

    let captions: CaptionsBlob = serde_json::from_str(blob)
        .map_err(|e| TranscriptError::ParseFailed(format!("caption track list: {}", e)))?;

    let tracks = captions
        .renderer
        .map(|r| r.caption_tracks)
        .unwrap_or_default();

    if tracks.is_empty() {
        return Err(TranscriptError::TranscriptsDisabled {
            video_id: video_id.to_string(),
        });
    }

    Ok(tracks)
}

/// Pick the first track matching the language preference list in order.
/// Within a language, a manually created track beats a generated one.
fn select_track<'a>(
    tracks: &'a [CaptionTrack],
    languages: &[String],
) -> Option<&'a CaptionTrack> {
    for lang in languages {
        if let Some(track) = tracks
            .iter()
            .find(|t| t.language_code == *lang && !t.is_generated())
        {
            return Some(track);
        }
        if let Some(track) = tracks.iter().find(|t| t.language_code == *lang) {
            return Some(track);
        }
    }
    None
}

/// Parse timed-text XML into entries.
///
/// The payload is a flat list of `<text start=".." dur="..">..</text>`
/// elements; anything else is ignored.
fn parse_timed_text(xml: &str) -> Vec<TranscriptEntry> {
    let mut entries = Vec::new();
    let mut rest = xml;

    while let Some(open) = rest.find("<text") {
        rest = &rest[open + "<text".len()..];
        let Some(tag_end) = rest.find('>') else {
            break;
        };
        let attrs = &rest[..tag_end];
        let start_secs = attr_value(attrs, "start")
            .and_then(|v| v.parse::<f64>().ok())
            .unwrap_or(0.0);
        let duration_secs = attr_value(attrs, "dur")
            .and_then(|v| v.parse::<f64>().ok())
            .unwrap_or(0.0);
        rest = &rest[tag_end + 1..];

        if attrs.trim_end().ends_with('/') {
            // Self-closing element: timing without text.
            entries.push(TranscriptEntry {
                text: String::new(),
                start_secs,
                duration_secs,
            });
            continue;
        }

        let body_end = rest.find("</text>").unwrap_or(rest.len());
        let raw = &rest[..body_end];
        rest = &rest[body_end..];

        entries.push(TranscriptEntry {
            text: clean_entry_text(raw),
            start_secs,
            duration_secs,
        });
    }

    entries
}

/// Read a double-quoted attribute value.
fn attr_value<'a>(attrs: &'a str, name: &str) -> Option<&'a str> {
    let marker = format!("{}=\"", name);
    let start = attrs.find(&marker)? + marker.len();
    let rest = &attrs[start..];
    let end = rest.find('"')?;
    Some(&rest[..end])
}

/// Decode HTML entities and strip residual markup from a caption body.
fn clean_entry_text(raw: &str) -> String {
    let decoded = html_escape::decode_html_entities(raw);
    let mut out = String::with_capacity(decoded.len());
    let mut in_tag = false;
    for c in decoded.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}
