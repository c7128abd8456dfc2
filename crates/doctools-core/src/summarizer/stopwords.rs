//! English stopwords excluded from term frequency.

use once_cell::sync::Lazy;
use std::collections::HashSet;

const STOPWORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "is", "are", "was", "were", "be", "being", "been", "i",
    "you", "he", "she", "it", "we", "they", "them", "me", "my", "our", "your", "his", "her", "its",
    "their", "to", "of", "in", "for", "on", "at", "from", "by", "with", "as", "that", "this",
    "those", "these", "not", "no", "do", "does", "did", "have", "has", "had", "can", "could",
    "should", "would", "will", "just", "than", "then", "so", "if", "while", "during", "over",
    "into", "out", "up", "down", "about", "above", "below", "under", "again", "further", "here",
    "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more", "most",
    "other", "some", "such", "nor", "only", "own", "same", "too", "very", "s", "t", "d", "ll",
    "m", "o", "re", "ve", "y",
];

static STOPWORD_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| STOPWORDS.iter().copied().collect());

/// Check whether a lowercase token is a stopword.
pub fn is_stopword(token: &str) -> bool {
    STOPWORD_SET.contains(token)
}
