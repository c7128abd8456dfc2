//! Plain text extraction.
//!
//! Decoding is lossy by contract: invalid UTF-8 sequences are dropped, not
//! replaced, and the number of dropped bytes is reported by
//! [`decode_lossy`] so callers can tell when information was lost.

use crate::error::ExtractResult;
use crate::format::FormatTag;
use crate::Extractor;

/// Outcome of a lossy UTF-8 decode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LossyText {
    /// Decoded text with invalid sequences removed.
    pub text: String,
    /// Number of input bytes that were dropped.
    pub dropped_bytes: usize,
}

impl LossyText {
    /// Whether any input bytes were dropped.
    pub fn is_lossy(&self) -> bool {
        self.dropped_bytes > 0
    }
}

/// Decode bytes as UTF-8, dropping invalid sequences.
pub fn decode_lossy(content: &[u8]) -> LossyText {
    let mut decoded = LossyText {
        text: String::with_capacity(content.len()),
        dropped_bytes: 0,
    };
    for chunk in content.utf8_chunks() {
        decoded.text.push_str(chunk.valid());
        decoded.dropped_bytes += chunk.invalid().len();
    }
    decoded
}

/// Plain text extractor. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextExtractor;

impl TextExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Extractor for TextExtractor {
    fn extract(&self, content: &[u8]) -> ExtractResult<String> {
        Ok(decode_lossy(content).text)
    }

    fn format(&self) -> FormatTag {
        FormatTag::Txt
    }

    fn name(&self) -> &str {
        "utf8-lossy"
    }
}
