//! Multipart upload handling.

use axum::{body::Bytes, extract::Multipart};
use doctools_core::{detect_format, FormatTag, RawDocument};

use crate::config::BYTES_PER_MB;
use crate::error::{ApiError, ApiResult};

/// Name of the multipart field carrying the document.
pub const FILE_FIELD: &str = "file";

/// A document received through a multipart upload.
#[derive(Debug, Clone)]
pub struct Upload {
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

impl Upload {
    /// Read the `file` field from a multipart body. Other fields are ignored.
    pub async fn from_multipart(mut multipart: Multipart) -> ApiResult<Self> {
        while let Some(field) = multipart.next_field().await? {
            if field.name() != Some(FILE_FIELD) {
                continue;
            }
            let filename = field.file_name().map(str::to_string);
            let content_type = field.content_type().map(str::to_string);
            let bytes = field.bytes().await?;
            return Ok(Self {
                filename,
                content_type,
                bytes,
            });
        }

        Err(ApiError::bad_request(format!(
            "Missing multipart field \"{}\"",
            FILE_FIELD
        )))
    }

    /// Size in bytes.
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Reject uploads larger than `max_file_mb`.
    pub fn ensure_size_ok(&self, max_file_mb: f64) -> ApiResult<usize> {
        let size = self.size();
        let mb = size as f64 / BYTES_PER_MB;
        if mb > max_file_mb {
            return Err(ApiError::payload_too_large(format!(
                "File too large ({:.2} MB). Max allowed is {:?} MB.",
                mb, max_file_mb
            ))
            .with_details(serde_json::json!({
                "size_bytes": size,
                "max_file_mb": max_file_mb,
            })));
        }
        Ok(size)
    }

    /// Detected format of the upload.
    pub fn format(&self) -> FormatTag {
        detect_format(self.filename.as_deref(), self.content_type.as_deref())
    }

    /// Borrow the upload as a pipeline input.
    pub fn as_raw(&self) -> RawDocument<'_> {
        RawDocument {
            content: &self.bytes,
            filename: self.filename.as_deref(),
            content_type: self.content_type.as_deref(),
        }
    }
}
