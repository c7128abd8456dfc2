//! Detect, extract and normalize in one call.

use serde::Serialize;

use crate::error::ExtractResult;
use crate::factory::ExtractorFactory;
use crate::format::{detect_format, FormatTag};
use crate::normalize::normalize;
use crate::types::{ExtractedText, RawDocument};

/// Normalized text of a document together with its detected format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedDocument {
    pub format: FormatTag,
    pub text: ExtractedText,
}

/// Extract normalized text from bytes of a known format.
pub fn extract(content: &[u8], format: FormatTag) -> ExtractResult<ExtractedText> {
    let extractor = ExtractorFactory::for_format(format)?;
    let raw = extractor.extract(content)?;
    Ok(normalize(&raw))
}

/// Pipeline routing a document to the extractor for its detected format.
///
/// Stateless; one instance can serve any number of concurrent callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentPipeline;

impl DocumentPipeline {
    pub fn new() -> Self {
        Self
    }

    /// Detect the document's format from its declared metadata.
    pub fn detect(&self, document: &RawDocument<'_>) -> FormatTag {
        detect_format(document.filename, document.content_type)
    }

    /// Extract normalized text from a document.
    ///
    /// An `UnsupportedFormat` error carries the document's declared filename
    /// and content type.
    pub fn extract(&self, document: &RawDocument<'_>) -> ExtractResult<ExtractedDocument> {
        let format = self.detect(document);
        let text = extract(document.content, format)
            .map_err(|e| e.with_declared(document.filename, document.content_type))?;
        Ok(ExtractedDocument { format, text })
    }

    /// Check if the pipeline can handle a document with this metadata.
    pub fn supports(&self, document: &RawDocument<'_>) -> bool {
        ExtractorFactory::for_format(self.detect(document)).is_ok()
    }
}
