//! PDF text extraction using pdf-extract.

use std::panic::{self, AssertUnwindSafe};

use crate::error::{ExtractError, ExtractResult};
use crate::format::FormatTag;
use crate::Extractor;

/// PDF text extractor using the pdf-extract library.
///
/// Concatenates the text of every page in document order. Glyphs the
/// library cannot map are skipped by pdf-extract itself; a document whose
/// structure cannot be read at all is an [`ExtractError::ExtractionFailed`].
///
/// pdf-extract panics on some malformed streams. The panic is caught and
/// returned as an error, but the process panic hook still runs first, so
/// with the default hook the message is printed to stderr. Hosts that need
/// a silent core should install their own hook with
/// [`std::panic::set_hook`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractor;

impl PdfExtractor {
    /// Create new PDF extractor.
    pub fn new() -> Self {
        Self
    }
}

impl Extractor for PdfExtractor {
    fn extract(&self, content: &[u8]) -> ExtractResult<String> {
        // pdf-extract panics on some malformed streams instead of erroring.
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem(content)
        }));

        match outcome {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => Err(ExtractError::failed(FormatTag::Pdf, e.to_string())),
            Err(payload) => {
                let message = payload
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "PDF parser aborted".to_string());
                Err(ExtractError::failed(FormatTag::Pdf, message))
            }
        }
    }

    fn format(&self) -> FormatTag {
        FormatTag::Pdf
    }

    fn name(&self) -> &str {
        "pdf-extract"
    }
}
