//! Extraction error types.

use thiserror::Error;

use crate::format::FormatTag;

/// Errors that can occur during text extraction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// No extractor exists for the detected format.
    #[error(
        "Unsupported format (filename: {}, content type: {})",
        .filename.as_deref().unwrap_or("<none>"),
        .content_type.as_deref().unwrap_or("<none>")
    )]
    UnsupportedFormat {
        /// Declared filename, if any.
        filename: Option<String>,
        /// Declared content type, if any.
        content_type: Option<String>,
    },

    /// The bytes were of a recognized format but could not be parsed.
    #[error("{format} extraction failed: {message}")]
    ExtractionFailed {
        /// Format the extractor was working on.
        format: FormatTag,
        /// Underlying cause.
        message: String,
    },
}

impl ExtractError {
    /// Unsupported format with no declared metadata.
    pub fn unsupported() -> Self {
        Self::UnsupportedFormat {
            filename: None,
            content_type: None,
        }
    }

    pub fn failed(format: FormatTag, message: impl Into<String>) -> Self {
        Self::ExtractionFailed {
            format,
            message: message.into(),
        }
    }

    /// Attach the declared filename and content type to an
    /// `UnsupportedFormat` error. Other variants pass through untouched.
    pub fn with_declared(self, filename: Option<&str>, content_type: Option<&str>) -> Self {
        match self {
            Self::UnsupportedFormat { .. } => Self::UnsupportedFormat {
                filename: filename.map(str::to_string),
                content_type: content_type.map(str::to_string),
            },
            other => other,
        }
    }
}

/// Result type for extraction operations.
pub type ExtractResult<T> = Result<T, ExtractError>;
