//! Document endpoints: text extraction, summaries and word counts.

use std::time::Instant;

use axum::{
    extract::{rejection::QueryRejection, Multipart, Query, State},
    Json,
};
use doctools_core::{compute_statistics, summarize, ExtractedDocument, FormatTag, Statistics};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::upload::Upload;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Characters of output included in log records.
const PREVIEW_CHARS: usize = 200;

/// Default number of summary sentences.
pub const DEFAULT_SUMMARY_SENTENCES: usize = 5;

/// Accepted range for the `sentences` query parameter.
pub const SUMMARY_SENTENCES_RANGE: std::ops::RangeInclusive<usize> = 1..=20;

/// Request metadata echoed back with every document response.
#[derive(Debug, Clone, Serialize)]
pub struct RequestMeta {
    pub endpoint: &'static str,
    pub filename: Option<String>,
    pub ext: FormatTag,
    pub size_bytes: usize,
    pub elapsed_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentences: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct ExtractTextResponse {
    pub text: String,
    pub meta: RequestMeta,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    /// Selected sentences joined by a space.
    pub summary: String,
    /// Selected sentences in document order.
    pub sentences: Vec<String>,
    pub meta: RequestMeta,
}

#[derive(Debug, Serialize)]
pub struct WordCountResponse {
    pub counts: Statistics,
    pub meta: RequestMeta,
}

/// Query parameters for summaries.
#[derive(Debug, Deserialize)]
pub struct SummaryQuery {
    pub sentences: Option<usize>,
}

fn range_error(value: serde_json::Value) -> ApiError {
    ApiError::validation(format!(
        "sentences must be an integer between {} and {}",
        SUMMARY_SENTENCES_RANGE.start(),
        SUMMARY_SENTENCES_RANGE.end()
    ))
    .with_details(serde_json::json!({ "sentences": value }))
}

/// Resolve the `sentences` parameter. Malformed values are validation
/// errors just like out-of-range ones.
fn sentence_budget(query: Result<Query<SummaryQuery>, QueryRejection>) -> ApiResult<usize> {
    let Query(query) = query.map_err(|rejection| range_error(rejection.body_text().into()))?;
    let sentences = query.sentences.unwrap_or(DEFAULT_SUMMARY_SENTENCES);
    if !SUMMARY_SENTENCES_RANGE.contains(&sentences) {
        return Err(range_error(sentences.into()));
    }
    Ok(sentences)
}

fn preview(text: &str) -> String {
    text.chars().take(PREVIEW_CHARS).collect()
}

/// Size-check the upload and run it through the pipeline on the blocking
/// pool, then apply `derive` to the extracted document there as well.
async fn process<T, F>(
    state: &AppState,
    upload: &Upload,
    endpoint: &'static str,
    derive: F,
) -> ApiResult<(usize, T)>
where
    T: Send + 'static,
    F: FnOnce(ExtractedDocument) -> T + Send + 'static,
{
    let size = upload.ensure_size_ok(state.max_file_mb())?;

    let pipeline = state.pipeline;
    let owned = upload.clone();
    let result = tokio::task::spawn_blocking(move || {
        pipeline.extract(&owned.as_raw()).map(derive)
    })
    .await?;

    match result {
        Ok(value) => Ok((size, value)),
        Err(e) => {
            warn!(
                endpoint,
                filename = upload.filename.as_deref().unwrap_or(""),
                ext = %upload.format(),
                size_bytes = size,
                error = %e,
                "Failed to extract document"
            );
            Err(ApiError::from(e))
        }
    }
}

fn meta(upload: &Upload, endpoint: &'static str, size: usize, started: Instant) -> RequestMeta {
    RequestMeta {
        endpoint,
        filename: upload.filename.clone(),
        ext: upload.format(),
        size_bytes: size,
        elapsed_ms: started.elapsed().as_millis() as u64,
        sentences: None,
    }
}

/// Extract normalized text from an uploaded document.
/// POST /extract-text
pub async fn extract_text(
    State(state): State<AppState>,
    multipart: Multipart,
) -> ApiResult<Json<ExtractTextResponse>> {
    let started = Instant::now();
    let upload = Upload::from_multipart(multipart).await?;

    let (size, text) = process(&state, &upload, "/extract-text", |doc| {
        doc.text.into_string()
    })
    .await?;
    let meta = meta(&upload, "/extract-text", size, started);

    info!(
        event = "extract_text",
        endpoint = meta.endpoint,
        filename = meta.filename.as_deref().unwrap_or(""),
        ext = %meta.ext,
        size_bytes = meta.size_bytes,
        elapsed_ms = meta.elapsed_ms,
        preview = %preview(&text),
        "Extracted document text"
    );

    Ok(Json(ExtractTextResponse { text, meta }))
}

/// Summarize an uploaded document.
/// POST /summary?sentences=N
pub async fn summary(
    State(state): State<AppState>,
    query: Result<Query<SummaryQuery>, QueryRejection>,
    multipart: Multipart,
) -> ApiResult<Json<SummaryResponse>> {
    let started = Instant::now();
    let sentences = sentence_budget(query)?;

    let upload = Upload::from_multipart(multipart).await?;
    let (size, selected) = process(&state, &upload, "/summary", move |doc| {
        summarize(doc.text.as_str(), sentences)
    })
    .await?;

    let mut meta = meta(&upload, "/summary", size, started);
    meta.sentences = Some(sentences);
    let summary = selected.joined();

    info!(
        event = "summary",
        endpoint = meta.endpoint,
        filename = meta.filename.as_deref().unwrap_or(""),
        ext = %meta.ext,
        size_bytes = meta.size_bytes,
        elapsed_ms = meta.elapsed_ms,
        sentences,
        preview = %preview(&summary),
        "Summarized document"
    );

    Ok(Json(SummaryResponse {
        summary,
        sentences: selected.texts(),
        meta,
    }))
}

/// Count characters, words and lines of an uploaded document.
/// POST /word-count
pub async fn word_count(
    State(state): State<AppState>,
    multipart: Multipart,
) -> ApiResult<Json<WordCountResponse>> {
    let started = Instant::now();
    let upload = Upload::from_multipart(multipart).await?;

    let (size, counts) = process(&state, &upload, "/word-count", |doc| {
        compute_statistics(doc.text.as_str())
    })
    .await?;
    let meta = meta(&upload, "/word-count", size, started);

    info!(
        event = "word_count",
        endpoint = meta.endpoint,
        filename = meta.filename.as_deref().unwrap_or(""),
        ext = %meta.ext,
        size_bytes = meta.size_bytes,
        elapsed_ms = meta.elapsed_ms,
        characters = counts.characters,
        words = counts.words,
        lines = counts.lines,
        "Counted document words"
    );

    Ok(Json(WordCountResponse { counts, meta }))
}
