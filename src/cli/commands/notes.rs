//! Notes command implementation.

use crate::cli::Output;
use crate::config::Settings;
use crate::notes::{format_notes, NotesFormat};
use crate::orchestrator::Orchestrator;
use anyhow::Result;
use std::path::PathBuf;

/// Run the notes command.
pub async fn run_notes(
    input: &str,
    language: Option<String>,
    output: Option<String>,
    format: &str,
    transcript_only: bool,
    settings: Settings,
) -> Result<()> {
    let format: NotesFormat = format.parse().map_err(|e: String| anyhow::anyhow!(e))?;
    let orchestrator = Orchestrator::new(settings)?;

    if transcript_only {
        let spinner = Output::spinner("Fetching transcript...");
        let transcript = orchestrator
            .fetch_transcript(input, language.as_deref())
            .await;
        spinner.finish_and_clear();

        let transcript = match transcript {
            Ok(t) => t,
            Err(e) => {
                Output::error(&format!("Failed to fetch transcript: {}", e));
                return Err(e.into());
            }
        };

        match &output {
            Some(path) => {
                std::fs::write(path, &transcript.full_text)?;
                Output::success(&format!("Transcript written to {}", path));
            }
            None => println!("{}", transcript.full_text),
        }
        return Ok(());
    }

    let spinner = Output::spinner("Generating notes (this may take a while)...");
    let notes = match orchestrator.generate_notes(input, language.as_deref()).await {
        Ok(notes) => {
            spinner.finish_and_clear();
            notes
        }
        Err(e) => {
            spinner.finish_and_clear();
            Output::error(&format!("Failed to generate notes: {}", e));
            return Err(e.into());
        }
    };

    match &output {
        Some(path) => {
            let path = PathBuf::from(path);
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(&path, format_notes(&notes, format))?;
            Output::success(&format!(
                "Notes for '{}' written to {}",
                notes.title,
                path.display()
            ));
        }
        None => print_notes(&notes, format),
    }

    Ok(())
}

/// Print notes to stdout; the text format gets a styled layout instead of
/// the raw export rendering.
fn print_notes(notes: &crate::orchestrator::NotesResult, format: NotesFormat) {
    if format != NotesFormat::Text {
        println!("{}", format_notes(notes, format));
        return;
    }

    Output::header(&format!("{} ({})", notes.title, notes.video_id));
    Output::kv("Language", &notes.language_code);
    Output::kv("Chunks", &notes.chunk_summaries.len().to_string());

    Output::header("Final Summary");
    println!("{}", notes.final_summary);

    if !notes.bullets.is_empty() {
        Output::header("Bullet Points");
        for bullet in &notes.bullets {
            Output::bullet(bullet);
        }
    }

    if !notes.keywords.is_empty() {
        Output::header("Keywords");
        println!("  {}", notes.keywords.join(", "));
    }

    Output::header("Chunk Summaries");
    for (i, summary) in notes.chunk_summaries.iter().enumerate() {
        println!("\n[Chunk {}]\n{}", i + 1, summary);
    }
}
