//! Language-based backend selection.
//!
//! Detection is best-effort: any failure or ambiguity falls back to the
//! primary backend. Callers never see a detection error.

use tracing::debug;
use whatlang::Lang;

/// Which summarization backend to use for a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// Tuned for the default/expected language (English).
    Primary,
    /// Generic fallback for all other detected languages.
    Multilingual,
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendKind::Primary => write!(f, "primary"),
            BackendKind::Multilingual => write!(f, "multilingual"),
        }
    }
}

/// Detect the dominant language of `text`, if identifiable.
pub fn detect_language(text: &str) -> Option<Lang> {
    whatlang::detect(text).map(|info| info.lang())
}

/// Select a backend for `text` by detected language.
///
/// English and anything undetectable map to the primary backend.
pub fn select_backend(text: &str) -> BackendKind {
    match detect_language(text) {
        Some(Lang::Eng) => BackendKind::Primary,
        Some(lang) => {
            debug!("Detected language {}, using multilingual backend", lang.code());
            BackendKind::Multilingual
        }
        None => {
            debug!("Language detection inconclusive, using primary backend");
            BackendKind::Primary
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_selects_primary() {
        let text = "The lecture explains how compilers translate source code \
                    into machine instructions through several analysis phases.";
        assert_eq!(select_backend(text), BackendKind::Primary);
    }

    #[test]
    fn test_other_language_selects_multilingual() {
        let text = "Эта лекция объясняет, как компиляторы переводят исходный \
                    код в машинные инструкции через несколько фаз анализа.";
        assert_eq!(select_backend(text), BackendKind::Multilingual);
    }

    #[test]
    fn test_detection_failure_falls_back_to_primary() {
        // Empty and numeric-only input cannot be classified
        assert_eq!(select_backend(""), BackendKind::Primary);
        assert_eq!(select_backend("12345 67890"), BackendKind::Primary);
    }
}
