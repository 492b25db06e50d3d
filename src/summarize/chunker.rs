//! Overlapping fixed-size text windows.

use crate::error::{NotatError, Result};

/// Split `text` into overlapping windows of `size` characters.
///
/// Starting at offset 0, each window is `size` characters long (the last may
/// be shorter) and the start offset advances by `size - overlap`. The overlap
/// preserves context across window boundaries for backends that have no
/// cross-chunk memory.
///
/// Offsets are measured in characters, not bytes, so multibyte transcripts
/// never split a code point.
pub fn chunk_text(text: &str, size: usize, overlap: usize) -> Result<Vec<String>> {
    if size == 0 {
        return Err(NotatError::InvalidParameter(
            "chunk size must be greater than zero".to_string(),
        ));
    }
    if overlap >= size {
        return Err(NotatError::InvalidParameter(format!(
            "overlap ({}) must be smaller than chunk size ({})",
            overlap, size
        )));
    }

    let chars: Vec<char> = text.chars().collect();
    let step = size - overlap;
    let mut chunks = Vec::new();
    let mut start = 0;

    while start < chars.len() {
        let end = (start + size).min(chars.len());
        chunks.push(chars[start..end].iter().collect());
        start += step;
    }

    Ok(chunks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NotatError;

    #[test]
    fn test_chunk_example() {
        // Start offsets advance by size - overlap: 0, 3, 6, 9
        let chunks = chunk_text("abcdefghij", 4, 1).unwrap();
        assert_eq!(chunks, vec!["abcd", "defg", "ghij", "j"]);
    }

    #[test]
    fn test_empty_text() {
        let chunks = chunk_text("", 4, 1).unwrap();
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_short_text_single_chunk() {
        let chunks = chunk_text("abc", 10, 2).unwrap();
        assert_eq!(chunks, vec!["abc"]);
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(matches!(
            chunk_text("abc", 0, 0),
            Err(NotatError::InvalidParameter(_))
        ));
        assert!(matches!(
            chunk_text("abc", 5, 5),
            Err(NotatError::InvalidParameter(_))
        ));
        assert!(matches!(
            chunk_text("abc", 5, 7),
            Err(NotatError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_overlap_invariant() {
        let text = "the quick brown fox jumps over the lazy dog and keeps running";
        let size = 12;
        let overlap = 4;
        let chunks = chunk_text(text, size, overlap).unwrap();

        for pair in chunks.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            // The final chunk may be shorter than the overlap
            if b.chars().count() < overlap {
                continue;
            }
            let tail: String = a.chars().skip(a.chars().count() - overlap).collect();
            let head: String = b.chars().take(overlap).collect();
            assert_eq!(tail, head);
        }
    }

    #[test]
    fn test_coverage_no_gaps() {
        let text = "abcdefghijklmnopqrstuvwxyz";
        let chunks = chunk_text(text, 7, 3).unwrap();

        // Strip each chunk's overlap with its predecessor and reassemble
        let mut rebuilt = chunks[0].clone();
        for chunk in &chunks[1..] {
            rebuilt.push_str(&chunk.chars().skip(3).collect::<String>());
        }
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn test_multibyte_boundaries() {
        let text = "héllö wörld ünïcödé tëxt hère";
        let chunks = chunk_text(text, 8, 2).unwrap();
        assert!(!chunks.is_empty());
        assert_eq!(chunks[0].chars().count(), 8);
    }
}
