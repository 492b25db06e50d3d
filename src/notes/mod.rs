//! Note post-processors: bullet points and keywords.
//!
//! Both are pure string heuristics over the final summary; neither calls a
//! backend and neither can fail.

mod format;

pub use format::{format_notes, NotesExport, NotesFormat};

use regex::Regex;
use std::collections::HashMap;

/// Minimum trimmed length for a sentence to qualify as a bullet.
pub const MIN_BULLET_CHARS: usize = 40;

/// Default cap on the number of bullet points.
pub const MAX_BULLETS: usize = 8;

/// Default number of keywords to keep.
pub const TOP_KEYWORDS: usize = 10;

/// Tokens never ranked as keywords.
const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "are", "but", "not", "you", "all", "can", "had", "her", "was", "one",
    "our", "out", "has", "have", "him", "his", "how", "its", "may", "new", "now", "old", "see",
    "two", "way", "who", "did", "get", "use", "that", "this", "with", "from", "they", "will",
    "would", "there", "their", "what", "about", "which", "when", "were", "your", "said", "each",
    "she", "them", "than", "then", "these", "some", "into", "more", "also", "been", "because",
    "could", "other", "after", "over", "such", "only", "most", "very", "just", "where", "those",
    "being", "while", "does", "here", "both", "between", "through",
];

/// Split a summary into bullet points.
///
/// Sentence boundaries are a terminal punctuation mark (`.`, `!`, `?`)
/// followed by whitespace. A sentence becomes a bullet only if its trimmed
/// length exceeds `min_chars`; the result keeps original order and is capped
/// at `max_points`.
pub fn bullet_points(summary: &str, max_points: usize, min_chars: usize) -> Vec<String> {
    let boundary = Regex::new(r"[.!?]\s+").expect("Invalid regex");

    let mut sentences = Vec::new();
    let mut last = 0;
    for m in boundary.find_iter(summary) {
        // Keep the punctuation mark with its sentence
        sentences.push(&summary[last..m.start() + 1]);
        last = m.end();
    }
    if last < summary.len() {
        sentences.push(&summary[last..]);
    }

    sentences
        .into_iter()
        .map(str::trim)
        .filter(|s| s.chars().count() > min_chars)
        .map(str::to_string)
        .take(max_points)
        .collect()
}

/// Extract the `top_k` highest-frequency terms from `text`.
///
/// With a corpus of one document, TF-IDF degenerates to term frequency, so
/// terms are ranked by raw frequency over lowercased word tokens (at least
/// three characters, stop words excluded). Ties break toward the term that
/// appears first in the text, which keeps the ranking deterministic.
pub fn keywords(text: &str, top_k: usize) -> Vec<String> {
    let token = Regex::new(r"[\w']+").expect("Invalid regex");
    let lowered = text.to_lowercase();

    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (position, m) in token.find_iter(&lowered).enumerate() {
        let term = m.as_str();
        if term.chars().count() < 3 || STOP_WORDS.contains(&term) {
            continue;
        }
        let entry = counts.entry(term).or_insert((0, position));
        entry.0 += 1;
    }

    let mut ranked: Vec<(&str, (usize, usize))> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1 .0.cmp(&a.1 .0).then(a.1 .1.cmp(&b.1 .1)));

    ranked
        .into_iter()
        .take(top_k)
        .map(|(term, _)| term.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullet_length_filter() {
        let text = format!("Short. {}. Tiny.", "x".repeat(50));
        let bullets = bullet_points(&text, MAX_BULLETS, MIN_BULLET_CHARS);

        assert_eq!(bullets.len(), 1);
        assert!(bullets[0].starts_with("xxx"));
    }

    #[test]
    fn test_bullet_cap_preserves_order() {
        let sentences: Vec<String> = (0..20)
            .map(|i| format!("Sentence number {} padded out well past forty characters.", i))
            .collect();
        let text = sentences.join(" ");

        let bullets = bullet_points(&text, 8, MIN_BULLET_CHARS);
        assert_eq!(bullets.len(), 8);
        assert!(bullets[0].contains("number 0"));
        assert!(bullets[7].contains("number 7"));
    }

    #[test]
    fn test_bullets_empty_input() {
        assert!(bullet_points("", MAX_BULLETS, MIN_BULLET_CHARS).is_empty());
    }

    #[test]
    fn test_bullets_handle_question_and_exclamation() {
        let text = format!(
            "Why does this lecture keep asking rhetorical questions at length? {}!",
            "y".repeat(50)
        );
        let bullets = bullet_points(&text, MAX_BULLETS, MIN_BULLET_CHARS);
        assert_eq!(bullets.len(), 2);
        assert!(bullets[0].ends_with('?'));
    }

    #[test]
    fn test_keyword_bound_and_empty() {
        assert!(keywords("", 5).is_empty());

        let text = "compiler compiler compiler parser parser lexer tokens grammar syntax semantics optimization";
        let result = keywords(text, 5);
        assert_eq!(result.len(), 5);
    }

    #[test]
    fn test_keyword_frequency_ranking() {
        let text = "neural networks learn. neural networks generalize. networks overfit.";
        let result = keywords(text, 3);

        assert_eq!(result[0], "networks"); // 3 occurrences
        assert_eq!(result[1], "neural"); // 2 occurrences
    }

    #[test]
    fn test_keyword_tie_break_first_occurrence() {
        let result = keywords("alpha beta gamma", 3);
        assert_eq!(result, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_keywords_skip_stop_words_and_short_tokens() {
        let result = keywords("the the the an ox entropy entropy", 5);
        assert_eq!(result[0], "entropy");
        assert!(!result.contains(&"the".to_string()));
        assert!(!result.contains(&"ox".to_string()));
    }
}
