//! Notat - Video Transcripts to Study Notes
//!
//! A CLI tool that turns a video's spoken-language transcript into study notes.
//!
//! The name "Notat" comes from the Norwegian/Scandinavian word for "note."
//!
//! # Overview
//!
//! Notat allows you to:
//! - List available caption languages for a YouTube video
//! - Fetch and normalize a caption transcript
//! - Reduce arbitrarily long transcripts to a final summary with
//!   hierarchical chunk-and-merge summarization
//! - Derive bullet points and keywords from the final summary
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Configuration management
//! - `transcript` - Transcript model and caption retrieval
//! - `summarize` - Chunking, backend selection, and the reduction pipeline
//! - `notes` - Bullet point and keyword post-processors, export formats
//! - `orchestrator` - Pipeline coordination
//!
//! # Example
//!
//! ```rust,no_run
//! use notat::config::Settings;
//! use notat::orchestrator::Orchestrator;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let orchestrator = Orchestrator::new(settings)?;
//!
//!     let notes = orchestrator.generate_notes("dQw4w9WgXcQ", None).await?;
//!     println!("{}", notes.final_summary);
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod notes;
pub mod orchestrator;
pub mod summarize;
pub mod transcript;

pub use error::{NotatError, Result};
