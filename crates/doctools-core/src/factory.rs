//! Extractor dispatch by format.

use crate::error::{ExtractError, ExtractResult};
use crate::format::FormatTag;
use crate::text::TextExtractor;
use crate::Extractor;

#[cfg(feature = "pdf")]
use crate::PdfExtractor;

#[cfg(feature = "docx")]
use crate::DocxExtractor;

/// Factory for text extractors.
pub struct ExtractorFactory;

impl ExtractorFactory {
    /// Create a PDF extractor.
    #[cfg(feature = "pdf")]
    pub fn pdf() -> &'static dyn Extractor {
        &PdfExtractor
    }

    /// Create a DOCX extractor.
    #[cfg(feature = "docx")]
    pub fn docx() -> &'static dyn Extractor {
        &DocxExtractor
    }

    /// Create a plain text extractor.
    pub fn text() -> &'static dyn Extractor {
        &TextExtractor
    }

    /// Extractor for a given format.
    ///
    /// Fails with `UnsupportedFormat` for [`FormatTag::Unknown`] and for
    /// formats whose cargo feature is disabled.
    pub fn for_format(format: FormatTag) -> ExtractResult<&'static dyn Extractor> {
        match format {
            #[cfg(feature = "pdf")]
            FormatTag::Pdf => Ok(Self::pdf()),

            #[cfg(feature = "docx")]
            FormatTag::Docx => Ok(Self::docx()),

            FormatTag::Txt => Ok(Self::text()),

            #[allow(unreachable_patterns)]
            _ => Err(ExtractError::unsupported()),
        }
    }

    /// Get all available extractors.
    #[allow(clippy::vec_init_then_push)]
    pub fn all() -> Vec<&'static dyn Extractor> {
        let mut extractors: Vec<&'static dyn Extractor> = Vec::new();

        #[cfg(feature = "pdf")]
        extractors.push(Self::pdf());

        #[cfg(feature = "docx")]
        extractors.push(Self::docx());

        extractors.push(Self::text());

        extractors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_all_extractors() {
        let extractors = ExtractorFactory::all();

        #[cfg(all(feature = "pdf", feature = "docx"))]
        assert_eq!(extractors.len(), 3);

        #[cfg(not(any(feature = "pdf", feature = "docx")))]
        assert_eq!(extractors.len(), 1);

        assert!(extractors.iter().any(|e| e.format() == FormatTag::Txt));
    }

    #[test]
    fn test_factory_for_format_text() {
        let extractor = ExtractorFactory::for_format(FormatTag::Txt).unwrap();
        assert_eq!(extractor.format(), FormatTag::Txt);
    }

    #[cfg(feature = "pdf")]
    #[test]
    fn test_factory_for_format_pdf() {
        let extractor = ExtractorFactory::for_format(FormatTag::Pdf).unwrap();
        assert_eq!(extractor.name(), "pdf-extract");
    }

    #[cfg(feature = "docx")]
    #[test]
    fn test_factory_for_format_docx() {
        let extractor = ExtractorFactory::for_format(FormatTag::Docx).unwrap();
        assert_eq!(extractor.name(), "docx-rs");
    }

    #[test]
    fn test_factory_unknown_is_unsupported() {
        let result = ExtractorFactory::for_format(FormatTag::Unknown);
        assert!(matches!(result, Err(ExtractError::UnsupportedFormat { .. })));
    }
}
