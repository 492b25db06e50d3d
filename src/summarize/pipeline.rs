//! The hierarchical reduction pipeline.
//!
//! First pass: chunk the raw text and summarize every chunk. Second pass:
//! join the chunk summaries, re-chunk the merged text with a smaller window,
//! summarize every re-chunk, and join the results into the final summary.
//! A single flat call cannot respect the backend's input ceiling for
//! arbitrarily long transcripts; the two-level reduction keeps every backend
//! call below that ceiling at the cost of some loss across merge boundaries.

use super::{chunk_text, select_backend, BackendSet};
use crate::config::SummarizationSettings;
use crate::error::{NotatError, Result};
use futures::stream::{self, StreamExt, TryStreamExt};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Output of one reduction run.
#[derive(Debug, Clone)]
pub struct Summary {
    /// One summary per first-pass chunk, in chunk order.
    pub chunk_summaries: Vec<String>,
    /// The merged-and-re-summarized final summary.
    pub final_summary: String,
}

/// Hierarchical summarizer over a shared backend set.
pub struct Summarizer {
    backends: Arc<BackendSet>,
    config: SummarizationSettings,
}

impl Summarizer {
    pub fn new(backends: Arc<BackendSet>, config: SummarizationSettings) -> Self {
        Self { backends, config }
    }

    /// Summarize one chunk with the backend selected by detected language.
    #[instrument(skip(self, chunk), fields(chars = chunk.len()))]
    pub async fn summarize_chunk(&self, chunk: &str) -> Result<String> {
        let kind = select_backend(chunk);
        debug!("Using {} backend", kind);
        self.backends
            .get(kind)
            .summarize(chunk, self.config.max_output_len, self.config.min_output_len)
            .await
    }

    /// Reduce `text` to chunk summaries and a final summary.
    ///
    /// Fails atomically: if any chunk fails, no partial result is returned.
    #[instrument(skip(self, text), fields(chars = text.len()))]
    pub async fn summarize_text(&self, text: &str) -> Result<Summary> {
        let chunks = chunk_text(text, self.config.chunk_size, self.config.chunk_overlap)?;
        info!("Summarizing {} chunks", chunks.len());

        let chunk_summaries = self.summarize_all(&chunks).await?;

        let merged = chunk_summaries.join(" ");
        let merge_chunks = chunk_text(
            &merged,
            self.config.merge_chunk_size,
            self.config.merge_overlap,
        )?;
        debug!("Merged summaries re-chunked into {} windows", merge_chunks.len());

        let merge_summaries = self.summarize_all(&merge_chunks).await?;
        let final_summary = merge_summaries.join(" ");

        Ok(Summary {
            chunk_summaries,
            final_summary,
        })
    }

    /// Summarize every chunk, preserving input order in the output.
    ///
    /// Chunks run with bounded concurrency; `buffered` yields results in
    /// input order regardless of completion order.
    async fn summarize_all(&self, chunks: &[String]) -> Result<Vec<String>> {
        let concurrency = self.config.max_concurrent_chunks.max(1);

        stream::iter(chunks.iter().enumerate().map(|(index, chunk)| async move {
            self.summarize_chunk(chunk)
                .await
                .map_err(|e| NotatError::Summarization {
                    chunk_index: index,
                    message: e.to_string(),
                })
        }))
        .buffered(concurrency)
        .try_collect()
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summarize::SummaryBackend;
    use async_trait::async_trait;

    /// Backend that wraps its input, making call order observable.
    struct EchoBackend;

    #[async_trait]
    impl SummaryBackend for EchoBackend {
        async fn summarize(&self, text: &str, _max: u32, _min: u32) -> Result<String> {
            Ok(format!("<{}>", text))
        }
    }

    /// Backend that fails whenever the input contains a marker.
    struct PoisonBackend;

    #[async_trait]
    impl SummaryBackend for PoisonBackend {
        async fn summarize(&self, text: &str, _max: u32, _min: u32) -> Result<String> {
            if text.contains('!') {
                return Err(NotatError::Backend("input over limit".to_string()));
            }
            Ok(text.to_string())
        }
    }

    fn test_config(chunk_size: usize, overlap: usize) -> SummarizationSettings {
        SummarizationSettings {
            chunk_size,
            chunk_overlap: overlap,
            merge_chunk_size: 1000,
            merge_overlap: 120,
            max_concurrent_chunks: 3,
            ..SummarizationSettings::default()
        }
    }

    fn summarizer<B: SummaryBackend + 'static>(
        backend: B,
        config: SummarizationSettings,
    ) -> Summarizer {
        let backend: Arc<dyn SummaryBackend> = Arc::new(backend);
        Summarizer::new(Arc::new(BackendSet::new(backend.clone(), backend)), config)
    }

    #[tokio::test]
    async fn test_order_preserved_under_concurrency() {
        let s = summarizer(EchoBackend, test_config(4, 1));
        let summary = s.summarize_text("abcdefghij").await.unwrap();

        // Same windows chunk_text produces, in the same order
        assert_eq!(
            summary.chunk_summaries,
            vec!["<abcd>", "<defg>", "<ghij>", "<j>"]
        );
    }

    #[tokio::test]
    async fn test_final_summary_covers_merged_text() {
        let s = summarizer(EchoBackend, test_config(4, 1));
        let summary = s.summarize_text("abcdefghij").await.unwrap();

        // Merged text fits one merge window, so the final summary is the
        // re-summarized join of the chunk summaries
        assert_eq!(summary.final_summary, "<<abcd> <defg> <ghij> <j>>");
    }

    #[tokio::test]
    async fn test_empty_text_yields_empty_summary() {
        let s = summarizer(EchoBackend, test_config(4, 1));
        let summary = s.summarize_text("").await.unwrap();

        assert!(summary.chunk_summaries.is_empty());
        assert!(summary.final_summary.is_empty());
    }

    #[tokio::test]
    async fn test_failure_carries_chunk_index_and_aborts() {
        // size 4, overlap 1: windows start at 0, 3, 6, 9; the marker at
        // offset 7 lands in chunk 2
        let s = summarizer(PoisonBackend, test_config(4, 1));
        let err = s.summarize_text("abcdefg!ij").await.unwrap_err();

        match err {
            NotatError::Summarization { chunk_index, .. } => assert_eq!(chunk_index, 2),
            other => panic!("expected Summarization error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_config_rejected() {
        let s = summarizer(EchoBackend, test_config(4, 4));
        assert!(matches!(
            s.summarize_text("abcdefghij").await,
            Err(NotatError::InvalidParameter(_))
        ));
    }
}
