//! Core types for document text processing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A document as handed over by the caller.
///
/// Borrows the caller's buffer; nothing in the pipeline keeps it past a
/// single extraction call.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawDocument<'a> {
    /// Raw document bytes.
    pub content: &'a [u8],
    /// Declared filename, if any.
    pub filename: Option<&'a str>,
    /// Declared content type, if any.
    pub content_type: Option<&'a str>,
}

impl<'a> RawDocument<'a> {
    /// Create a document with no format hints.
    pub fn new(content: &'a [u8]) -> Self {
        Self {
            content,
            filename: None,
            content_type: None,
        }
    }

    /// Set the declared filename.
    pub fn with_filename(mut self, filename: &'a str) -> Self {
        self.filename = Some(filename);
        self
    }

    /// Set the declared content type.
    pub fn with_content_type(mut self, content_type: &'a str) -> Self {
        self.content_type = Some(content_type);
        self
    }

    /// Size of the raw content in bytes.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Check if the raw content is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Normalized document text.
///
/// Every line is trimmed and non-empty, lines are joined with `\n` and keep
/// the source reading order. Values are only built by
/// [`normalize`](crate::normalize), so the invariant always holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ExtractedText(String);

impl ExtractedText {
    pub(crate) fn from_normalized(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterate over the lines in document order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.0.split('\n').filter(|line| !line.is_empty())
    }

    pub fn line_count(&self) -> usize {
        self.lines().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for ExtractedText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExtractedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Basic counts over normalized text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    /// Unicode scalar values, including line separators.
    pub characters: usize,
    /// Whitespace-delimited tokens.
    pub words: usize,
    /// Non-empty lines.
    pub lines: usize,
}

/// A sentence and its 0-based position in the segmented text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Position before any selection or reordering.
    pub position: usize,
    /// Trimmed sentence text.
    pub text: String,
}

impl Sentence {
    pub fn new(position: usize, text: impl Into<String>) -> Self {
        Self {
            position,
            text: text.into(),
        }
    }
}

/// Sentences selected for an extractive summary, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub sentences: Vec<Sentence>,
}

impl Summary {
    pub fn new(sentences: Vec<Sentence>) -> Self {
        Self { sentences }
    }

    /// Sentence texts in document order.
    pub fn texts(&self) -> Vec<String> {
        self.sentences.iter().map(|s| s.text.clone()).collect()
    }

    /// Sentences joined by a single space.
    pub fn joined(&self) -> String {
        self.sentences
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}
