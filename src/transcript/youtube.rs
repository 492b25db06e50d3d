//! YouTube caption retrieval.
//!
//! Caption track URLs are discovered through `yt-dlp --dump-json` and the
//! selected track is downloaded directly in the `json3` timed-text format.

use super::{Transcript, TranscriptSegment};
use crate::error::{NotatError, Result};
use regex::Regex;
use serde::Deserialize;

/// A caption track available for a video.
#[derive(Debug, Clone)]
pub struct CaptionTrack {
    /// Human-readable language name (e.g. "English").
    pub language: String,
    /// BCP-47 language code (e.g. "en").
    pub language_code: String,
    /// Whether the track is auto-generated rather than manually authored.
    pub is_generated: bool,
    /// Direct URL of the json3 timed-text payload.
    pub url: String,
}

impl CaptionTrack {
    /// Display label, matching how tracks are listed to the user.
    pub fn label(&self) -> String {
        let kind = if self.is_generated { "Auto" } else { "Manual" };
        format!("{} ({}) - {}", self.language, self.language_code, kind)
    }
}

/// Caption tracks available for a video, plus its title.
#[derive(Debug, Clone)]
pub struct VideoCaptions {
    pub video_id: String,
    pub title: String,
    /// Manually authored tracks first, then auto-generated ones.
    pub tracks: Vec<CaptionTrack>,
}

/// YouTube caption source.
pub struct CaptionSource {
    video_id_regex: Regex,
    http: reqwest::Client,
}

impl CaptionSource {
    pub fn new() -> Self {
        // Matches various YouTube URL formats and bare video IDs
        let video_id_regex = Regex::new(
            r"(?x)
            (?:
                # Full YouTube URLs
                (?:https?://)?
                (?:www\.)?
                (?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/|youtube\.com/v/)
                ([a-zA-Z0-9_-]{11})
            )
            |
            # Bare video ID (11 characters)
            ^([a-zA-Z0-9_-]{11})$
        ",
        )
        .expect("Invalid regex");

        Self {
            video_id_regex,
            http: reqwest::Client::new(),
        }
    }

    /// Extract video ID from a YouTube URL or bare ID.
    pub fn extract_video_id(&self, input: &str) -> Option<String> {
        let caps = self.video_id_regex.captures(input.trim())?;

        // Try group 1 (URL format) then group 2 (bare ID)
        caps.get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str().to_string())
    }

    /// List the caption tracks available for a video.
    pub async fn list_captions(&self, video_id: &str) -> Result<VideoCaptions> {
        let url = format!("https://www.youtube.com/watch?v={}", video_id);

        let output = tokio::process::Command::new("yt-dlp")
            .args([
                "--dump-json",
                "--no-download",
                "--no-warnings",
                "--ignore-errors",
                &url,
            ])
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    NotatError::ToolNotFound("yt-dlp".to_string())
                } else {
                    NotatError::ToolFailed(format!("Failed to run yt-dlp: {}", e))
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(NotatError::VideoNotFound(format!(
                "Video {} not found or unavailable: {}",
                video_id, stderr
            )));
        }

        let json_str = String::from_utf8_lossy(&output.stdout);
        let json: serde_json::Value = serde_json::from_str(&json_str).map_err(|e| {
            NotatError::Transcript(format!("Failed to parse yt-dlp output: {}", e))
        })?;

        let title = json["title"]
            .as_str()
            .unwrap_or("Unknown Title")
            .to_string();

        let mut tracks = collect_tracks(&json["subtitles"], false);
        tracks.extend(collect_tracks(&json["automatic_captions"], true));

        if tracks.is_empty() {
            return Err(NotatError::CaptionsNotFound(format!(
                "No caption tracks for video {}",
                video_id
            )));
        }

        Ok(VideoCaptions {
            video_id: video_id.to_string(),
            title,
            tracks,
        })
    }

    /// Fetch and parse the transcript for a caption track.
    pub async fn fetch_transcript(
        &self,
        video_id: &str,
        track: &CaptionTrack,
    ) -> Result<Transcript> {
        let body = self
            .http
            .get(&track.url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let timed_text: TimedText = serde_json::from_str(&body).map_err(|e| {
            NotatError::Transcript(format!(
                "Failed to parse caption payload for {}: {}",
                track.language_code, e
            ))
        })?;

        let segments = timed_text
            .events
            .into_iter()
            .filter_map(|event| {
                let text: String = event
                    .segs
                    .iter()
                    .map(|s| s.utf8.as_str())
                    .collect::<Vec<_>>()
                    .concat();
                let text = text.trim().to_string();
                if text.is_empty() {
                    return None;
                }
                Some(TranscriptSegment::new(
                    event.start_ms as f64 / 1000.0,
                    event.duration_ms as f64 / 1000.0,
                    text,
                ))
            })
            .collect();

        Ok(Transcript::new(video_id.to_string(), segments))
    }
}

impl Default for CaptionSource {
    fn default() -> Self {
        Self::new()
    }
}

/// Pull caption tracks out of a yt-dlp subtitle map (language code ->
/// list of formats), preferring the json3 format for each language.
fn collect_tracks(subtitle_map: &serde_json::Value, is_generated: bool) -> Vec<CaptionTrack> {
    let Some(map) = subtitle_map.as_object() else {
        return Vec::new();
    };

    let mut tracks = Vec::new();
    for (code, formats) in map {
        let Some(formats) = formats.as_array() else {
            continue;
        };

        let format = formats
            .iter()
            .find(|f| f["ext"].as_str() == Some("json3"))
            .or_else(|| formats.first());

        if let Some(format) = format {
            let Some(url) = format["url"].as_str() else {
                continue;
            };
            let language = format["name"]
                .as_str()
                .unwrap_or(code.as_str())
                .to_string();

            tracks.push(CaptionTrack {
                language,
                language_code: code.clone(),
                is_generated,
                url: url.to_string(),
            });
        }
    }

    tracks
}

/// YouTube json3 timed-text payload.
#[derive(Debug, Deserialize)]
struct TimedText {
    #[serde(default)]
    events: Vec<TimedTextEvent>,
}

#[derive(Debug, Deserialize)]
struct TimedTextEvent {
    #[serde(rename = "tStartMs", default)]
    start_ms: u64,
    #[serde(rename = "dDurationMs", default)]
    duration_ms: u64,
    #[serde(default)]
    segs: Vec<TimedTextSeg>,
}

#[derive(Debug, Deserialize)]
struct TimedTextSeg {
    #[serde(default)]
    utf8: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_video_id() {
        let source = CaptionSource::new();

        // Test various URL formats
        assert_eq!(
            source.extract_video_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            source.extract_video_id("https://youtu.be/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            source.extract_video_id("dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ".to_string())
        );

        // Test invalid inputs
        assert_eq!(source.extract_video_id("not-a-video-id"), None);
        assert_eq!(source.extract_video_id(""), None);
    }

    #[test]
    fn test_collect_tracks() {
        let json: serde_json::Value = serde_json::json!({
            "en": [
                {"ext": "vtt", "url": "https://example.com/en.vtt", "name": "English"},
                {"ext": "json3", "url": "https://example.com/en.json3", "name": "English"}
            ],
            "de": [
                {"ext": "vtt", "url": "https://example.com/de.vtt", "name": "German"}
            ]
        });

        let tracks = collect_tracks(&json, false);
        assert_eq!(tracks.len(), 2);

        let en = tracks.iter().find(|t| t.language_code == "en").unwrap();
        assert_eq!(en.url, "https://example.com/en.json3");
        assert_eq!(en.label(), "English (en) - Manual");

        // No json3 format available, falls back to the first entry
        let de = tracks.iter().find(|t| t.language_code == "de").unwrap();
        assert_eq!(de.url, "https://example.com/de.vtt");
    }

    #[test]
    fn test_parse_timed_text() {
        let payload = r#"{
            "events": [
                {"tStartMs": 0, "dDurationMs": 2500, "segs": [{"utf8": "Hello "}, {"utf8": "world"}]},
                {"tStartMs": 2500, "dDurationMs": 1000},
                {"tStartMs": 3500, "dDurationMs": 2000, "segs": [{"utf8": "again"}]}
            ]
        }"#;

        let timed: TimedText = serde_json::from_str(payload).unwrap();
        assert_eq!(timed.events.len(), 3);
        assert_eq!(timed.events[0].segs.len(), 2);
        assert_eq!(timed.events[2].start_ms, 3500);
    }
}
