//! Notes output formatting (text, markdown, JSON).
//!
//! Provides utilities for exporting generated notes for saving to disk or
//! piping into other systems.

use crate::orchestrator::NotesResult;
use serde::Serialize;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NotesFormat {
    Text,
    Markdown,
    Json,
}

impl std::str::FromStr for NotesFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(NotesFormat::Text),
            "markdown" | "md" => Ok(NotesFormat::Markdown),
            "json" => Ok(NotesFormat::Json),
            _ => Err(format!("Unknown format: {}. Use text, markdown, or json.", s)),
        }
    }
}

/// JSON-serializable notes for export.
#[derive(Debug, Serialize)]
pub struct NotesExport<'a> {
    pub video_id: &'a str,
    pub title: &'a str,
    pub language_code: &'a str,
    pub chunk_summaries: &'a [String],
    pub final_summary: &'a str,
    pub bullets: &'a [String],
    pub keywords: &'a [String],
}

impl<'a> From<&'a NotesResult> for NotesExport<'a> {
    fn from(notes: &'a NotesResult) -> Self {
        Self {
            video_id: &notes.video_id,
            title: &notes.title,
            language_code: &notes.language_code,
            chunk_summaries: &notes.chunk_summaries,
            final_summary: &notes.final_summary,
            bullets: &notes.bullets,
            keywords: &notes.keywords,
        }
    }
}

/// Format notes for output.
pub fn format_notes(notes: &NotesResult, format: NotesFormat) -> String {
    match format {
        NotesFormat::Text => format_text(notes),
        NotesFormat::Markdown => format_markdown(notes),
        NotesFormat::Json => format_json(notes),
    }
}

/// Format as plain text, one section per pipeline output.
fn format_text(notes: &NotesResult) -> String {
    let mut output = String::new();

    output.push_str(&format!("{} ({})\n\n", notes.title, notes.video_id));

    for (i, summary) in notes.chunk_summaries.iter().enumerate() {
        output.push_str(&format!("--- Chunk {} Summary ---\n{}\n\n", i + 1, summary));
    }

    output.push_str(&format!("--- Final Summary ---\n{}\n\n", notes.final_summary));

    if !notes.bullets.is_empty() {
        output.push_str("--- Bullet Points ---\n");
        for bullet in &notes.bullets {
            output.push_str(&format!("* {}\n", bullet));
        }
        output.push('\n');
    }

    if !notes.keywords.is_empty() {
        output.push_str("--- Keywords ---\n");
        output.push_str(&notes.keywords.join(", "));
        output.push('\n');
    }

    output
}

/// Format as markdown.
fn format_markdown(notes: &NotesResult) -> String {
    let mut output = String::new();

    output.push_str(&format!("# {}\n\n", notes.title));

    output.push_str("## Summary\n\n");
    output.push_str(&notes.final_summary);
    output.push_str("\n\n");

    if !notes.bullets.is_empty() {
        output.push_str("## Key Points\n\n");
        for bullet in &notes.bullets {
            output.push_str(&format!("- {}\n", bullet));
        }
        output.push('\n');
    }

    if !notes.keywords.is_empty() {
        output.push_str("## Keywords\n\n");
        output.push_str(&notes.keywords.join(", "));
        output.push_str("\n\n");
    }

    output.push_str("## Chunk Summaries\n\n");
    for (i, summary) in notes.chunk_summaries.iter().enumerate() {
        output.push_str(&format!("### Chunk {}\n\n{}\n\n", i + 1, summary));
    }

    output
}

/// Format as JSON.
fn format_json(notes: &NotesResult) -> String {
    let export = NotesExport::from(notes);
    serde_json::to_string_pretty(&export).unwrap_or_else(|_| "{}".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_notes() -> NotesResult {
        NotesResult {
            video_id: "test123".to_string(),
            title: "Intro to Parsers".to_string(),
            language_code: "en".to_string(),
            chunk_summaries: vec!["First chunk.".to_string(), "Second chunk.".to_string()],
            final_summary: "Parsers turn tokens into trees.".to_string(),
            bullets: vec!["Parsers turn tokens into trees.".to_string()],
            keywords: vec!["parsers".to_string(), "tokens".to_string()],
        }
    }

    #[test]
    fn test_format_text() {
        let text = format_notes(&sample_notes(), NotesFormat::Text);
        assert!(text.contains("--- Chunk 1 Summary ---"));
        assert!(text.contains("--- Final Summary ---"));
        assert!(text.contains("parsers, tokens"));
    }

    #[test]
    fn test_format_markdown() {
        let md = format_notes(&sample_notes(), NotesFormat::Markdown);
        assert!(md.starts_with("# Intro to Parsers"));
        assert!(md.contains("## Key Points"));
        assert!(md.contains("### Chunk 2"));
    }

    #[test]
    fn test_format_json() {
        let json = format_notes(&sample_notes(), NotesFormat::Json);
        assert!(json.contains("\"video_id\": \"test123\""));
        assert!(json.contains("\"final_summary\""));
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("text".parse::<NotesFormat>().unwrap(), NotesFormat::Text);
        assert_eq!("md".parse::<NotesFormat>().unwrap(), NotesFormat::Markdown);
        assert_eq!("json".parse::<NotesFormat>().unwrap(), NotesFormat::Json);
        assert!("yaml".parse::<NotesFormat>().is_err());
    }
}
