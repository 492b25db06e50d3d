//! Pipeline orchestrator for Notat.
//!
//! Coordinates the whole run: caption retrieval, normalization, hierarchical
//! summarization, and note post-processing.

use crate::config::{Prompts, Settings};
use crate::error::{NotatError, Result};
use crate::notes;
use crate::summarize::{BackendSet, Summarizer};
use crate::transcript::{CaptionSource, CaptionTrack, Transcript, VideoCaptions};
use std::sync::Arc;
use tracing::{info, instrument};

/// The main orchestrator for the Notat pipeline.
pub struct Orchestrator {
    settings: Settings,
    backends: Arc<BackendSet>,
    captions: CaptionSource,
}

impl Orchestrator {
    /// Create a new orchestrator with default configuration.
    ///
    /// Both summarization backends are constructed here, once, and shared
    /// read-only by every run for the lifetime of the process.
    pub fn new(settings: Settings) -> Result<Self> {
        // Load prompts (with optional custom directory and variables)
        let prompts = Prompts::load(
            settings.prompts.custom_dir.as_deref(),
            Some(&settings.prompts.variables),
        )?;

        let backends = Arc::new(BackendSet::from_settings(&settings.summarization, &prompts));

        Ok(Self {
            settings,
            backends,
            captions: CaptionSource::new(),
        })
    }

    /// Create an orchestrator with custom backends (for testing).
    pub fn with_backends(settings: Settings, backends: Arc<BackendSet>) -> Self {
        Self {
            settings,
            backends,
            captions: CaptionSource::new(),
        }
    }

    /// Get the settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// List the caption tracks available for a video URL or ID.
    pub async fn list_languages(&self, input: &str) -> Result<VideoCaptions> {
        let video_id = self.resolve_video_id(input)?;
        self.captions.list_captions(&video_id).await
    }

    /// Fetch and normalize a transcript without summarizing it.
    pub async fn fetch_transcript(
        &self,
        input: &str,
        language: Option<&str>,
    ) -> Result<Transcript> {
        let video_id = self.resolve_video_id(input)?;
        let captions = self.captions.list_captions(&video_id).await?;
        let track = pick_track(&captions, language)?;

        info!("Fetching transcript ({})", track.label());
        self.captions.fetch_transcript(&video_id, track).await
    }

    /// Generate study notes for a video: fetch the transcript, reduce it to
    /// a final summary, and derive bullet points and keywords.
    #[instrument(skip(self), fields(input = %input))]
    pub async fn generate_notes(
        &self,
        input: &str,
        language: Option<&str>,
    ) -> Result<NotesResult> {
        let video_id = self.resolve_video_id(input)?;

        info!("Listing caption tracks for {}", video_id);
        let captions = self.captions.list_captions(&video_id).await?;
        let track = pick_track(&captions, language)?;

        info!("Fetching transcript ({})", track.label());
        let transcript = self.captions.fetch_transcript(&video_id, track).await?;
        if transcript.full_text.is_empty() {
            return Err(NotatError::Transcript(format!(
                "Transcript for {} is empty after cleaning",
                video_id
            )));
        }

        info!(
            "Summarizing transcript ({} chars, {} segments)",
            transcript.full_text.len(),
            transcript.segments.len()
        );
        let summarizer = Summarizer::new(self.backends.clone(), self.settings.summarization.clone());
        let summary = summarizer.summarize_text(&transcript.full_text).await?;

        let bullets = notes::bullet_points(
            &summary.final_summary,
            self.settings.notes.max_bullets,
            self.settings.notes.min_bullet_chars,
        );
        let keywords = notes::keywords(&summary.final_summary, self.settings.notes.top_keywords);

        let language_code = track.language_code.clone();
        Ok(NotesResult {
            video_id: captions.video_id,
            title: captions.title,
            language_code,
            chunk_summaries: summary.chunk_summaries,
            final_summary: summary.final_summary,
            bullets,
            keywords,
        })
    }

    fn resolve_video_id(&self, input: &str) -> Result<String> {
        self.captions.extract_video_id(input).ok_or_else(|| {
            NotatError::InvalidInput(format!("Invalid YouTube video ID or URL: {}", input))
        })
    }
}

/// Pick a caption track: the requested language code if given, otherwise the
/// first manually-authored track, otherwise the first available.
fn pick_track<'a>(
    captions: &'a VideoCaptions,
    language: Option<&str>,
) -> Result<&'a CaptionTrack> {
    match language {
        Some(code) => captions
            .tracks
            .iter()
            .find(|t| t.language_code.eq_ignore_ascii_case(code))
            .ok_or_else(|| {
                let available: Vec<&str> = captions
                    .tracks
                    .iter()
                    .map(|t| t.language_code.as_str())
                    .collect();
                NotatError::CaptionsNotFound(format!(
                    "No '{}' captions for video {}. Available: {}",
                    code,
                    captions.video_id,
                    available.join(", ")
                ))
            }),
        None => captions
            .tracks
            .iter()
            .find(|t| !t.is_generated)
            .or_else(|| captions.tracks.first())
            .ok_or_else(|| {
                NotatError::CaptionsNotFound(format!(
                    "No caption tracks for video {}",
                    captions.video_id
                ))
            }),
    }
}

/// Result of a notes run.
#[derive(Debug, Clone)]
pub struct NotesResult {
    /// Video ID.
    pub video_id: String,
    /// Video title.
    pub title: String,
    /// Language code of the caption track used.
    pub language_code: String,
    /// One summary per transcript chunk, in chunk order.
    pub chunk_summaries: Vec<String>,
    /// The final merged summary.
    pub final_summary: String,
    /// Bullet points derived from the final summary.
    pub bullets: Vec<String>,
    /// Keywords derived from the final summary.
    pub keywords: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_captions() -> VideoCaptions {
        VideoCaptions {
            video_id: "vid".to_string(),
            title: "Title".to_string(),
            tracks: vec![
                CaptionTrack {
                    language: "German".to_string(),
                    language_code: "de".to_string(),
                    is_generated: true,
                    url: "https://example.com/de".to_string(),
                },
                CaptionTrack {
                    language: "English".to_string(),
                    language_code: "en".to_string(),
                    is_generated: false,
                    url: "https://example.com/en".to_string(),
                },
            ],
        }
    }

    #[test]
    fn test_pick_track_by_code() {
        let captions = sample_captions();
        let track = pick_track(&captions, Some("de")).unwrap();
        assert_eq!(track.language_code, "de");

        // Case-insensitive match
        let track = pick_track(&captions, Some("EN")).unwrap();
        assert_eq!(track.language_code, "en");
    }

    #[test]
    fn test_pick_track_prefers_manual() {
        let captions = sample_captions();
        let track = pick_track(&captions, None).unwrap();
        assert_eq!(track.language_code, "en");
        assert!(!track.is_generated);
    }

    #[test]
    fn test_pick_track_unknown_code_fails() {
        let captions = sample_captions();
        assert!(matches!(
            pick_track(&captions, Some("fr")),
            Err(NotatError::CaptionsNotFound(_))
        ));
    }
}
