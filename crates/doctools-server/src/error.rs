//! Error handling for the REST API server.

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use doctools_core::ExtractError;
use serde::Serialize;
use std::fmt;

/// API error type.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    pub fn new(status: StatusCode, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    // Common error constructors
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "BAD_REQUEST", message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", message)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, "VALIDATION_ERROR", message)
    }

    pub fn payload_too_large(message: impl Into<String>) -> Self {
        Self::new(StatusCode::PAYLOAD_TOO_LARGE, "PAYLOAD_TOO_LARGE", message)
    }

    pub fn unsupported_format(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "UNSUPPORTED_FORMAT", message)
    }

    pub fn extraction_failed(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            "EXTRACTION_FAILED",
            message,
        )
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.status, self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code,
                message: self.message,
                details: self.details,
            },
        };

        (self.status, Json(body)).into_response()
    }
}

// Convert from doctools-core errors
impl From<ExtractError> for ApiError {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::UnsupportedFormat {
                filename,
                content_type,
            } => ApiError::unsupported_format(
                "Unsupported file type. Please upload PDF, DOCX, or TXT.",
            )
            .with_details(serde_json::json!({
                "filename": filename,
                "content_type": content_type,
            })),
            ExtractError::ExtractionFailed { format, message } => {
                ApiError::extraction_failed(format!("Failed to parse document: {}", message))
                    .with_details(serde_json::json!({ "format": format }))
            }
        }
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        let status = err.status();
        if status == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::payload_too_large(err.body_text())
        } else {
            ApiError::new(status, "BAD_REQUEST", err.body_text())
        }
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        ApiError::internal(format!("Extraction task failed: {}", err))
    }
}

/// Result type alias for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use doctools_core::FormatTag;

    #[test]
    fn test_unsupported_format_maps_to_400() {
        let err = ApiError::from(ExtractError::UnsupportedFormat {
            filename: Some("notes.xyz".to_string()),
            content_type: None,
        });
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.code, "UNSUPPORTED_FORMAT");
        assert_eq!(
            err.message,
            "Unsupported file type. Please upload PDF, DOCX, or TXT."
        );
        assert_eq!(
            err.details,
            Some(serde_json::json!({"filename": "notes.xyz", "content_type": null}))
        );
    }

    #[test]
    fn test_extraction_failed_maps_to_422() {
        let err = ApiError::from(ExtractError::failed(FormatTag::Docx, "bad zip"));
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.code, "EXTRACTION_FAILED");
        assert_eq!(err.message, "Failed to parse document: bad zip");
        assert_eq!(err.details, Some(serde_json::json!({"format": "docx"})));
    }

    #[test]
    fn test_display() {
        let err = ApiError::payload_too_large("too big");
        assert_eq!(err.to_string(), "[413 Payload Too Large] PAYLOAD_TOO_LARGE: too big");
    }
}
