//! Configuration settings for Notat.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub summarization: SummarizationSettings,
    pub notes: NotesSettings,
    pub prompts: PromptSettings,
}


/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Directory for storing application data (exported notes, etc.).
    pub data_dir: String,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            data_dir: "~/.notat".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Summarization pipeline settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizationSettings {
    /// Model for the primary (English-tuned) backend.
    pub primary_model: String,
    /// Model for the multilingual fallback backend.
    pub multilingual_model: String,
    /// Chunk size in characters for the first reduction pass.
    pub chunk_size: usize,
    /// Overlap in characters between consecutive chunks.
    pub chunk_overlap: usize,
    /// Chunk size for re-chunking the merged chunk summaries.
    /// Smaller than the first pass so the second pass stays within
    /// the backend input budget even when there are many chunks.
    pub merge_chunk_size: usize,
    /// Overlap for the merge re-chunking pass.
    pub merge_overlap: usize,
    /// Maximum summary output length (backend units, roughly words).
    pub max_output_len: u32,
    /// Minimum summary output length.
    pub min_output_len: u32,
    /// Maximum concurrent backend calls during chunk summarization.
    pub max_concurrent_chunks: usize,
}

impl Default for SummarizationSettings {
    fn default() -> Self {
        Self {
            primary_model: "gpt-4o-mini".to_string(),
            multilingual_model: "gpt-4o".to_string(),
            chunk_size: 1200,
            chunk_overlap: 150,
            merge_chunk_size: 1000,
            merge_overlap: 120,
            max_output_len: 230,
            min_output_len: 110,
            max_concurrent_chunks: 2,
        }
    }
}

/// Note post-processing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotesSettings {
    /// Maximum number of bullet points to keep.
    pub max_bullets: usize,
    /// Minimum trimmed length (characters) for a sentence to become a bullet.
    pub min_bullet_chars: usize,
    /// Number of top keywords to keep.
    pub top_keywords: usize,
}

impl Default for NotesSettings {
    fn default() -> Self {
        Self {
            max_bullets: 8,
            min_bullet_chars: 40,
            top_keywords: 10,
        }
    }
}

/// Prompt customization settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct PromptSettings {
    /// Directory for custom prompts (overrides defaults).
    pub custom_dir: Option<String>,
    /// Custom variables available in all prompts as {{variable_name}}.
    pub variables: std::collections::HashMap<String, String>,
}


impl Settings {
    /// Load settings from the default configuration file.
    pub fn load() -> crate::error::Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or default location if None.
    pub fn load_from(path: Option<&PathBuf>) -> crate::error::Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to the default configuration file.
    pub fn save(&self) -> crate::error::Result<()> {
        self.save_to(&Self::default_config_path())
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::NotatError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("notat")
            .join("config.toml")
    }

    /// Expand shell variables in paths (e.g., ~).
    pub fn expand_path(path: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde(path).to_string())
    }

    /// Get the expanded data directory path.
    pub fn data_dir(&self) -> PathBuf {
        Self::expand_path(&self.general.data_dir)
    }
}
