//! CLI module for Notat.

pub mod commands;
mod output;

pub use output::Output;

use clap::{Parser, Subcommand};

/// Notat - Video Transcripts to Study Notes
///
/// A CLI tool that fetches a video's caption transcript and turns it into
/// study notes: summary, bullet points, and keywords.
/// The name "Notat" comes from the Norwegian/Scandinavian word for "note."
#[derive(Parser, Debug)]
#[command(name = "notat")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List available caption languages for a video
    Languages {
        /// YouTube URL or video ID
        input: String,
    },

    /// Generate study notes for a video
    Notes {
        /// YouTube URL or video ID
        input: String,

        /// Caption language code (e.g. "en"); defaults to the first manual track
        #[arg(short, long)]
        language: Option<String>,

        /// Write notes to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,

        /// Output format (text, markdown, json)
        #[arg(long, default_value = "text")]
        format: String,

        /// Fetch and print the cleaned transcript without summarizing
        #[arg(long)]
        transcript_only: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Open configuration file in editor
    Edit,

    /// Show configuration file path
    Path,
}
