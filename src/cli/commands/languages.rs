//! Languages command implementation.

use crate::cli::Output;
use crate::config::Settings;
use crate::orchestrator::Orchestrator;
use anyhow::Result;

/// Run the languages command.
pub async fn run_languages(input: &str, settings: Settings) -> Result<()> {
    let orchestrator = Orchestrator::new(settings)?;

    let spinner = Output::spinner("Fetching available caption languages...");
    let captions = match orchestrator.list_languages(input).await {
        Ok(captions) => {
            spinner.finish_and_clear();
            captions
        }
        Err(e) => {
            spinner.finish_and_clear();
            Output::error(&format!("Failed to list languages: {}", e));
            return Err(e.into());
        }
    };

    Output::header(&format!("{} ({})", captions.title, captions.video_id));
    println!();

    for track in &captions.tracks {
        Output::list_item(&track.label());
    }

    println!();
    Output::kv("Tracks", &captions.tracks.len().to_string());
    Output::info("Use 'notat notes <input> --language CODE' to pick a track.");

    Ok(())
}
