//! Sentence segmentation and tokenization.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::Sentence;

// Case-folded runs of ASCII letters and apostrophes.
static TOKEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z']+").expect("token pattern is valid"));

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Split text into sentences.
///
/// A boundary is a whitespace run directly after `.`, `!` or `?`; the run
/// itself is dropped. Sentences are trimmed and empty ones discarded, and
/// positions are assigned after filtering.
pub fn segment_sentences(text: &str) -> Vec<Sentence> {
    let mut pieces: Vec<&str> = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        if c.is_whitespace() && prev.is_some_and(is_terminator) {
            pieces.push(&text[start..idx]);
            while let Some(&(_, next)) = chars.peek() {
                if !next.is_whitespace() {
                    break;
                }
                chars.next();
            }
            start = chars.peek().map_or(text.len(), |&(i, _)| i);
            prev = None;
            continue;
        }
        prev = Some(c);
    }
    pieces.push(&text[start..]);

    pieces
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .enumerate()
        .map(|(position, text)| Sentence::new(position, text))
        .collect()
}

/// Lowercase the text and pull out its alphabetic tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    TOKEN_PATTERN
        .find_iter(&lower)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(sentences: &[Sentence]) -> Vec<&str> {
        sentences.iter().map(|s| s.text.as_str()).collect()
    }

    #[test]
    fn test_segment_basic() {
        let sentences = segment_sentences("One. Two! Three? Four");
        assert_eq!(texts(&sentences), vec!["One.", "Two!", "Three?", "Four"]);
        let positions: Vec<usize> = sentences.iter().map(|s| s.position).collect();
        assert_eq!(positions, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_segment_needs_whitespace_after_terminator() {
        let sentences = segment_sentences("Version 1.5 is out.It works. Done");
        assert_eq!(texts(&sentences), vec!["Version 1.5 is out.It works.", "Done"]);
    }

    #[test]
    fn test_segment_consumes_whitespace_runs_and_newlines() {
        let sentences = segment_sentences("Line one.\nLine two.   \n  Line three");
        assert_eq!(texts(&sentences), vec!["Line one.", "Line two.", "Line three"]);
    }

    #[test]
    fn test_segment_lines_without_terminator_stay_joined() {
        let sentences = segment_sentences("Heading\nBody text. More");
        assert_eq!(texts(&sentences), vec!["Heading\nBody text.", "More"]);
    }

    #[test]
    fn test_segment_empty_and_trailing() {
        assert!(segment_sentences("").is_empty());
        assert!(segment_sentences("   ").is_empty());
        assert_eq!(texts(&segment_sentences("Ends here. ")), vec!["Ends here."]);
        assert_eq!(texts(&segment_sentences("Wait... what?! ok")), vec!["Wait...", "what?!", "ok"]);
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(
            tokenize("Don't STOP, it's 42 o'clock!"),
            vec!["don't", "stop", "it's", "o'clock"]
        );
        assert!(tokenize("1234 ... !!!").is_empty());
    }
}
