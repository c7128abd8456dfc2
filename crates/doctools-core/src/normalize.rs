//! Text normalization.

use crate::types::ExtractedText;

/// Characters treated as line boundaries.
///
/// Covers `\n`, `\r` (so `\r\n` too), vertical tab, form feed, the
/// file/group/record separators, NEL and the Unicode line/paragraph
/// separators. PDF text output uses form feeds between pages.
pub(crate) fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{1c}'..='\u{1e}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Canonicalize extracted text into trimmed, non-empty lines joined by `\n`.
///
/// Idempotent and total: empty input gives empty output.
pub fn normalize(raw: &str) -> ExtractedText {
    let text = raw
        .split(is_line_boundary)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    ExtractedText::from_normalized(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_trims_and_drops_blank_lines() {
        let text = normalize("  first line  \n\n   \n\tsecond\t\r\nthird\n");
        assert_eq!(text.as_str(), "first line\nsecond\nthird");
        assert_eq!(text.lines().collect::<Vec<_>>(), vec!["first line", "second", "third"]);
    }

    #[test]
    fn test_page_breaks_split_lines() {
        let text = normalize("page one\u{0c}page two\rold mac\u{2028}unicode");
        assert_eq!(text.as_str(), "page one\npage two\nold mac\nunicode");
    }

    #[test]
    fn test_empty_and_whitespace_only() {
        assert!(normalize("").is_empty());
        assert!(normalize(" \n\t\n  ").is_empty());
        assert_eq!(normalize("").line_count(), 0);
    }

    #[test]
    fn test_internal_whitespace_kept() {
        assert_eq!(normalize("  a   b  ").as_str(), "a   b");
    }

    proptest! {
        #[test]
        fn prop_idempotent(raw in "(?s).{0,200}") {
            let once = normalize(&raw);
            let twice = normalize(once.as_str());
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_no_blank_or_untrimmed_lines(raw in "[ a-z\t\r\n.]{0,120}") {
            let text = normalize(&raw);
            if !text.is_empty() {
                for line in text.as_str().split('\n') {
                    prop_assert!(!line.is_empty());
                    prop_assert_eq!(line, line.trim());
                }
            }
        }
    }
}
