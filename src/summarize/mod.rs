//! Hierarchical chunk-and-merge summarization.
//!
//! Splits long text into overlapping fixed-size windows, summarizes each
//! window with a language-selected backend, then re-chunks and re-summarizes
//! the merged output so that every backend call stays within a fixed input
//! budget regardless of total transcript length.

mod backend;
mod chunker;
mod language;
mod pipeline;

pub use backend::{create_client, BackendSet, OpenAiBackend, SummaryBackend};
pub use chunker::chunk_text;
pub use language::{detect_language, select_backend, BackendKind};
pub use pipeline::{Summarizer, Summary};
