//! Document format detection.
//!
//! The format is a pure function of the declared filename and content type.
//! The filename always wins; the content type is only consulted when the
//! filename has no recognized extension.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

/// Document formats the pipeline knows about.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FormatTag {
    /// PDF document.
    Pdf,
    /// Office Open XML word processing document.
    Docx,
    /// Plain text.
    Txt,
    /// Anything else.
    #[default]
    Unknown,
}

impl FormatTag {
    /// Whether an extractor exists for this format.
    pub fn is_supported(self) -> bool {
        !matches!(self, FormatTag::Unknown)
    }

    /// Lowercase name, as used in responses and logs.
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Detect the format of a document from its filename and content type.
///
/// Never fails; anything unrecognized is [`FormatTag::Unknown`].
pub fn detect_format(filename: Option<&str>, content_type: Option<&str>) -> FormatTag {
    let name = filename.unwrap_or_default().to_lowercase();
    if name.ends_with(".pdf") {
        return FormatTag::Pdf;
    }
    if name.ends_with(".docx") {
        return FormatTag::Docx;
    }
    if name.ends_with(".txt") {
        return FormatTag::Txt;
    }

    let mime = content_type.unwrap_or_default().to_lowercase();
    if mime.contains("pdf") {
        FormatTag::Pdf
    } else if mime.contains("word") || mime.contains("docx") {
        FormatTag::Docx
    } else if mime.contains("text") {
        FormatTag::Txt
    } else {
        FormatTag::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    #[test]
    fn test_detect_by_extension() {
        assert_eq!(detect_format(Some("report.pdf"), None), FormatTag::Pdf);
        assert_eq!(detect_format(Some("Report.PDF"), None), FormatTag::Pdf);
        assert_eq!(detect_format(Some("letter.docx"), None), FormatTag::Docx);
        assert_eq!(detect_format(Some("notes.TxT"), None), FormatTag::Txt);
    }

    #[test]
    fn test_filename_beats_content_type() {
        assert_eq!(
            detect_format(Some("notes.txt"), Some("application/pdf")),
            FormatTag::Txt
        );
        assert_eq!(
            detect_format(Some("scan.pdf"), Some("text/plain")),
            FormatTag::Pdf
        );
    }

    #[test]
    fn test_detect_by_content_type() {
        assert_eq!(detect_format(None, Some("application/pdf")), FormatTag::Pdf);
        assert_eq!(
            detect_format(
                Some("upload"),
                Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document")
            ),
            FormatTag::Docx
        );
        assert_eq!(detect_format(None, Some("application/msword")), FormatTag::Docx);
        assert_eq!(detect_format(None, Some("TEXT/Plain")), FormatTag::Txt);
    }

    #[test]
    fn test_content_type_precedence() {
        // "pdf" is checked before "text"
        assert_eq!(detect_format(None, Some("text/pdf")), FormatTag::Pdf);
    }

    #[test]
    fn test_unknown() {
        assert_eq!(
            detect_format(Some("notes.xyz"), Some("application/octet-stream")),
            FormatTag::Unknown
        );
        assert_eq!(detect_format(None, None), FormatTag::Unknown);
        assert_eq!(detect_format(Some("archive.pdf.zip"), None), FormatTag::Unknown);
    }

    #[test]
    fn test_format_tag_strings() {
        assert_eq!(FormatTag::Docx.to_string(), "docx");
        assert_eq!(FormatTag::Unknown.as_str(), "unknown");
        assert_eq!(FormatTag::from_str("txt").unwrap(), FormatTag::Txt);
        assert_eq!(serde_json::to_string(&FormatTag::Pdf).unwrap(), "\"pdf\"");
        assert!(!FormatTag::Unknown.is_supported());
        assert!(FormatTag::Pdf.is_supported());
    }

    fn any_case(ext: &'static str) -> impl Strategy<Value = String> {
        proptest::collection::vec(any::<bool>(), ext.len()).prop_map(move |upper| {
            ext.chars()
                .zip(upper)
                .map(|(c, u)| if u { c.to_ascii_uppercase() } else { c })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn prop_extension_wins_over_content_type(
            stem in "[a-zA-Z0-9 _-]{0,12}",
            (ext, expected) in prop_oneof![
                any_case(".pdf").prop_map(|e| (e, FormatTag::Pdf)),
                any_case(".docx").prop_map(|e| (e, FormatTag::Docx)),
                any_case(".txt").prop_map(|e| (e, FormatTag::Txt)),
            ],
            content_type in proptest::option::of(".{0,40}"),
        ) {
            let filename = format!("{stem}{ext}");
            prop_assert_eq!(
                detect_format(Some(&filename), content_type.as_deref()),
                expected
            );
        }
    }
}
