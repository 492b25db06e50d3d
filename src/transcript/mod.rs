//! Transcript model and caption retrieval.
//!
//! A transcript is an ordered sequence of timed text segments, fetched once
//! per video-language selection and immutable afterwards. The summarization
//! pipeline only ever sees the whitespace-normalized `full_text`.

mod youtube;

pub use youtube::{CaptionSource, CaptionTrack, VideoCaptions};

use serde::{Deserialize, Serialize};

/// A complete transcript with segments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    /// Video ID this transcript belongs to.
    pub video_id: String,
    /// Individual transcript segments with timestamps.
    pub segments: Vec<TranscriptSegment>,
    /// Full transcript text (cleaned, concatenated segments).
    pub full_text: String,
    /// Total duration in seconds.
    pub duration_seconds: f64,
}

impl Transcript {
    /// Create a new transcript from segments.
    ///
    /// Empty segments are dropped; the full text is the space-joined,
    /// whitespace-normalized concatenation of the rest.
    pub fn new(video_id: String, segments: Vec<TranscriptSegment>) -> Self {
        let segments: Vec<TranscriptSegment> = segments
            .into_iter()
            .filter(|s| !s.text.trim().is_empty())
            .collect();

        let merged = segments
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let full_text = clean_text(&merged);

        let duration_seconds = segments.last().map(|s| s.end_seconds()).unwrap_or(0.0);

        Self {
            video_id,
            segments,
            full_text,
            duration_seconds,
        }
    }

    /// Format the transcript with timestamps for display.
    pub fn format_with_timestamps(&self) -> String {
        self.segments
            .iter()
            .map(|s| format!("[{}] {}", format_timestamp(s.start_seconds), s.text))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A single segment of a transcript with timestamp information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptSegment {
    /// Start time in seconds.
    pub start_seconds: f64,
    /// Duration in seconds.
    pub duration_seconds: f64,
    /// Transcribed text content.
    pub text: String,
}

impl TranscriptSegment {
    /// Create a new transcript segment.
    pub fn new(start_seconds: f64, duration_seconds: f64, text: String) -> Self {
        Self {
            start_seconds,
            duration_seconds,
            text,
        }
    }

    /// End time of this segment in seconds.
    pub fn end_seconds(&self) -> f64 {
        self.start_seconds + self.duration_seconds
    }
}

/// Normalize transcript text: collapse whitespace runs and drop stray
/// spaces before punctuation left behind by caption line breaks.
pub fn clean_text(text: &str) -> String {
    let ws = regex::Regex::new(r"\s+").expect("Invalid regex");
    let punct = regex::Regex::new(r"\s([?.!,])").expect("Invalid regex");

    let collapsed = ws.replace_all(text, " ");
    punct.replace_all(&collapsed, "$1").trim().to_string()
}

/// Format seconds as MM:SS or HH:MM:SS.
pub fn format_timestamp(seconds: f64) -> String {
    let total_seconds = seconds as u32;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}
