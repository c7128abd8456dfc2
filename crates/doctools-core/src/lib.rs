//! doctools-core - Document text extraction, statistics and summarization.
//!
//! Turns uploaded PDF, DOCX and plain text documents into normalized text,
//! then derives counts and a frequency-scored extractive summary from it.
//! Every operation is synchronous, pure and side-effect free; hosts are
//! expected to run extraction off their async reactor and to do their own
//! logging.
//!
//! # Features
//!
//! - `pdf` (default) - PDF text extraction via pdf-extract
//! - `docx` (default) - DOCX text extraction via docx-rs
//!
//! # Example
//!
//! ```ignore
//! use doctools_core::{compute_statistics, summarize, DocumentPipeline, RawDocument};
//!
//! let doc = RawDocument::new(&bytes)
//!     .with_filename("report.pdf")
//!     .with_content_type("application/pdf");
//! let extracted = DocumentPipeline::new().extract(&doc)?;
//!
//! let stats = compute_statistics(extracted.text.as_str());
//! let summary = summarize(extracted.text.as_str(), 5);
//! ```

mod error;
mod factory;
mod format;
mod normalize;
mod pipeline;
mod stats;
mod text;
mod types;

pub mod summarizer;

#[cfg(feature = "pdf")]
mod pdf;

#[cfg(feature = "docx")]
mod docx;

pub use error::{ExtractError, ExtractResult};
pub use factory::ExtractorFactory;
pub use format::{detect_format, FormatTag};
pub use normalize::normalize;
pub use pipeline::{extract, DocumentPipeline, ExtractedDocument};
pub use stats::compute_statistics;
pub use summarizer::{segment_sentences, summarize};
pub use text::{decode_lossy, LossyText, TextExtractor};
pub use types::{ExtractedText, RawDocument, Sentence, Statistics, Summary};

#[cfg(feature = "pdf")]
pub use pdf::PdfExtractor;

#[cfg(feature = "docx")]
pub use docx::DocxExtractor;

/// Core Extractor trait - one implementation per supported format.
pub trait Extractor: Send + Sync {
    /// Extract raw, unnormalized text from document bytes.
    fn extract(&self, content: &[u8]) -> ExtractResult<String>;

    /// Format this extractor handles.
    fn format(&self) -> FormatTag;

    /// Human-readable name for this extractor.
    fn name(&self) -> &str;
}
