//! Frequency-based extractive summarization.
//!
//! Sentences are scored by the average document frequency of their content
//! words, boosted slightly for appearing early in the document. The top
//! sentences are returned in their original order.

mod segment;
mod stopwords;

pub use segment::{segment_sentences, tokenize};
pub use stopwords::is_stopword;

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::types::{Sentence, Summary};

/// Added to the token count so empty sentences score zero instead of NaN.
pub const EPSILON: f64 = 1e-9;

/// Maximum positional boost, applied in full to the first sentence.
pub const POSITION_BOOST: f64 = 0.1;

/// Scale, in sentence positions, of the exponential decay of the boost.
pub const POSITION_DECAY: f64 = 5.0;

/// Tokens shorter than this never count towards frequency.
pub const MIN_TOKEN_LEN: usize = 3;

/// Content-word frequencies over the whole text.
fn term_frequencies(text: &str) -> HashMap<String, usize> {
    let mut freqs = HashMap::new();
    for token in tokenize(text) {
        if token.len() < MIN_TOKEN_LEN || is_stopword(&token) {
            continue;
        }
        *freqs.entry(token).or_insert(0) += 1;
    }
    freqs
}

/// Score a single sentence at the given position.
fn score_sentence(sentence: &Sentence, freqs: &HashMap<String, usize>) -> f64 {
    let tokens = tokenize(&sentence.text);
    let total: usize = tokens
        .iter()
        .map(|t| freqs.get(t).copied().unwrap_or(0))
        .sum();
    let base = total as f64 / (tokens.len() as f64 + EPSILON);
    base * (1.0 + POSITION_BOOST * (-(sentence.position as f64) / POSITION_DECAY).exp())
}

/// Select up to `max_sentences` sentences from normalized text.
///
/// Never fails: empty text gives an empty summary, and text with no content
/// words falls back to the leading sentences.
pub fn summarize(text: &str, max_sentences: usize) -> Summary {
    let mut sentences = segment_sentences(text);
    if sentences.len() <= max_sentences {
        return Summary::new(sentences);
    }

    let freqs = term_frequencies(text);
    if freqs.is_empty() {
        sentences.truncate(max_sentences);
        return Summary::new(sentences);
    }

    let mut scored: Vec<(f64, Sentence)> = sentences
        .into_iter()
        .map(|s| (score_sentence(&s, &freqs), s))
        .collect();

    // Highest score first; equal scores keep the earlier sentence.
    scored.sort_by(|(a_score, a), (b_score, b)| {
        b_score
            .partial_cmp(a_score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.position.cmp(&b.position))
    });
    scored.truncate(max_sentences);

    let mut selected: Vec<Sentence> = scored.into_iter().map(|(_, s)| s).collect();
    selected.sort_by_key(|s| s.position);
    Summary::new(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize;
    use proptest::prelude::*;

    #[test]
    fn test_prefers_repeated_content_words() {
        let summary = summarize("The cat sat. The cat played. A dog ran far away today.", 2);
        assert_eq!(summary.texts(), vec!["The cat sat.", "The cat played."]);
    }

    #[test]
    fn test_short_circuit_returns_everything() {
        let text = "Only one. And two.";
        let summary = summarize(text, 2);
        assert_eq!(summary.texts(), vec!["Only one.", "And two."]);
        assert_eq!(summarize(text, 20).len(), 2);
    }

    #[test]
    fn test_empty_text() {
        assert!(summarize("", 1).is_empty());
        assert!(summarize("", 5).is_empty());
    }

    #[test]
    fn test_zero_budget() {
        assert!(summarize("One thing. Two things. Three things.", 0).is_empty());
    }

    #[test]
    fn test_all_stopwords_falls_back_to_leading_sentences() {
        let summary = summarize("It is. We are. They were. So it is.", 2);
        assert_eq!(summary.texts(), vec!["It is.", "We are."]);
    }

    #[test]
    fn test_result_is_in_document_order() {
        let text = "Filler here. Rust compilers check borrows. More filler. \
                    Rust borrows are checked by compilers.";
        let summary = summarize(text, 2);
        assert_eq!(
            summary.texts(),
            vec![
                "Rust compilers check borrows.",
                "Rust borrows are checked by compilers."
            ]
        );
        let positions: Vec<usize> = summary.sentences.iter().map(|s| s.position).collect();
        assert_eq!(positions, vec![1, 3]);
    }

    #[test]
    fn test_positional_boost_prefers_earlier_duplicate() {
        // Identical sentences score identically before the positional boost,
        // and the boost favours the earlier one.
        let summary = summarize("Apples grow. Apples grow. Apples grow.", 1);
        assert_eq!(summary.sentences, vec![Sentence::new(0, "Apples grow.")]);
    }

    #[test]
    fn test_zero_scores_tie_to_earlier_sentences() {
        // Only the first sentence has content words; the rest all score 0.0.
        let text = "Cats purr loudly. It is. We are. So it is.";
        let summary = summarize(text, 2);
        assert_eq!(summary.texts(), vec!["Cats purr loudly.", "It is."]);

        let summary = summarize(text, 3);
        assert_eq!(summary.texts(), vec!["Cats purr loudly.", "It is.", "We are."]);
    }

    #[test]
    fn test_score_positional_boost() {
        let freqs: HashMap<String, usize> = [("cat".to_string(), 2)].into_iter().collect();
        let first = score_sentence(&Sentence::new(0, "cat"), &freqs);
        let later = score_sentence(&Sentence::new(5, "cat"), &freqs);
        assert!((first - 2.0 * 1.1).abs() < 1e-6);
        assert!((later - 2.0 * (1.0 + 0.1 * (-1.0f64).exp())).abs() < 1e-6);
        assert_eq!(score_sentence(&Sentence::new(0, "..."), &freqs), 0.0);
    }

    #[test]
    fn test_term_frequencies_filter() {
        let freqs = term_frequencies("The cat and the cat ox go.");
        assert_eq!(freqs.get("cat"), Some(&2));
        assert!(!freqs.contains_key("the"));
        assert!(!freqs.contains_key("ox"));
        assert!(!freqs.contains_key("go"));
    }

    proptest! {
        #[test]
        fn prop_summary_is_ordered_subset(
            raw in "([A-Za-z]{1,8}( [A-Za-z]{1,8}){0,6}[.!?] ){0,12}",
            n in 1usize..8,
        ) {
            let text = normalize(&raw);
            let all = segment_sentences(text.as_str());
            let summary = summarize(text.as_str(), n);

            prop_assert_eq!(summary.len(), all.len().min(n));
            for s in &summary.sentences {
                prop_assert!(all.contains(s));
            }
            for pair in summary.sentences.windows(2) {
                prop_assert!(pair[0].position < pair[1].position);
            }
            if all.len() <= n {
                prop_assert_eq!(&summary.sentences, &all);
            }
        }
    }
}
