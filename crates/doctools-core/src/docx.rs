//! DOCX text extraction using docx-rs.
//!
//! Only body paragraphs are read. Tables, images and other non-paragraph
//! content are skipped, and each paragraph becomes one line of output.

use docx_rs::{DocumentChild, ParagraphChild, RunChild};

use crate::error::{ExtractError, ExtractResult};
use crate::format::FormatTag;
use crate::Extractor;

/// DOCX text extractor using the docx-rs library.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxExtractor;

impl DocxExtractor {
    /// Create new DOCX extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extract text from a paragraph.
    fn paragraph_text(p: &docx_rs::Paragraph) -> String {
        let mut text = String::new();

        for child in &p.children {
            match child {
                ParagraphChild::Run(r) => Self::push_run(&mut text, r),
                ParagraphChild::Hyperlink(h) => {
                    for child in &h.children {
                        if let ParagraphChild::Run(r) = child {
                            Self::push_run(&mut text, r);
                        }
                    }
                }
                _ => {}
            }
        }

        text
    }

    fn push_run(text: &mut String, run: &docx_rs::Run) {
        for run_child in &run.children {
            match run_child {
                RunChild::Text(t) => text.push_str(&t.text),
                RunChild::Tab(_) => text.push('\t'),
                RunChild::Break(_) => text.push('\n'),
                _ => {}
            }
        }
    }
}

impl Extractor for DocxExtractor {
    fn extract(&self, content: &[u8]) -> ExtractResult<String> {
        let docx = docx_rs::read_docx(content)
            .map_err(|e| ExtractError::failed(FormatTag::Docx, format!("Failed to parse DOCX: {}", e)))?;

        let paragraphs: Vec<String> = docx
            .document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(p) => Some(Self::paragraph_text(p)),
                _ => None,
            })
            .collect();

        Ok(paragraphs.join("\n"))
    }

    fn format(&self) -> FormatTag {
        FormatTag::Docx
    }

    fn name(&self) -> &str {
        "docx-rs"
    }
}
