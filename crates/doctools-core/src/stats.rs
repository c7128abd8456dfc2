//! Character, word and line counts.

use crate::normalize::is_line_boundary;
use crate::types::Statistics;

/// Compute statistics over normalized text.
///
/// `characters` counts Unicode scalar values, so a multi-byte character
/// counts once. Total; empty input gives all zeros.
pub fn compute_statistics(text: &str) -> Statistics {
    Statistics {
        characters: text.chars().count(),
        words: text.split_whitespace().count(),
        lines: text
            .split(is_line_boundary)
            .filter(|line| !line.trim().is_empty())
            .count(),
    }
}
