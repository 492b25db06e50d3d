//! Configuration module for Notat.
//!
//! Handles loading and managing application settings and prompt templates.

mod prompts;
mod settings;

pub use prompts::{Prompts, SummarizePrompts};
pub use settings::{
    GeneralSettings, NotesSettings, PromptSettings, Settings, SummarizationSettings,
};
