use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::Path;
use utoipa::ToSchema;

const VIDEO_EXTENSIONS: &[&str] = &["mp4", "avi", "mkv", "mov"];
const PDF_EXTENSIONS: &[&str] = &["pdf"];
const DOCUMENT_EXTENSIONS: &[&str] = &["docx", "doc"];
const PRESENTATION_EXTENSIONS: &[&str] = &["pptx", "ppt"];

/// Closed classification of an uploaded file, derived from its extension
/// with the declared content-type as a fallback signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[cfg_attr(feature = "sqlx", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlx", sqlx(rename_all = "lowercase"))]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Video,
    Pdf,
    Document,
    Presentation,
    Other,
}

impl Display for MediaKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            MediaKind::Video => write!(f, "video"),
            MediaKind::Pdf => write!(f, "pdf"),
            MediaKind::Document => write!(f, "document"),
            MediaKind::Presentation => write!(f, "presentation"),
            MediaKind::Other => write!(f, "other"),
        }
    }
}

impl MediaKind {
    /// Classify an upload from its file name and declared content-type.
    ///
    /// Total and deterministic: the lowercased extension is matched against
    /// the four supported sets first; when no extension matches, the declared
    /// content-type is accepted on a substring basis. Unrecognized
    /// combinations map to `Other`.
    ///
    /// The content-type fallback is intentionally permissive: the declared
    /// type is client-supplied and file contents are not sniffed, so a
    /// mislabelled upload is at worst stored uncompressed.
    pub fn from_upload(file_name: &str, content_type: &str) -> Self {
        if let Some(ext) = file_extension(file_name) {
            if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
                return MediaKind::Video;
            }
            if PDF_EXTENSIONS.contains(&ext.as_str()) {
                return MediaKind::Pdf;
            }
            if DOCUMENT_EXTENSIONS.contains(&ext.as_str()) {
                return MediaKind::Document;
            }
            if PRESENTATION_EXTENSIONS.contains(&ext.as_str()) {
                return MediaKind::Presentation;
            }
        }

        let content_type = content_type.to_lowercase();
        if content_type.contains("video") {
            MediaKind::Video
        } else if content_type.contains("pdf") {
            MediaKind::Pdf
        } else if content_type.contains("document") {
            MediaKind::Document
        } else if content_type.contains("presentation") {
            MediaKind::Presentation
        } else {
            MediaKind::Other
        }
    }

    /// Whether an upload with this name/content-type is accepted at all.
    /// Mirrors `from_upload`: everything except `Other` is accepted.
    pub fn is_supported_upload(file_name: &str, content_type: &str) -> bool {
        Self::from_upload(file_name, content_type) != MediaKind::Other
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Video => "video",
            MediaKind::Pdf => "pdf",
            MediaKind::Document => "document",
            MediaKind::Presentation => "presentation",
            MediaKind::Other => "other",
        }
    }
}

/// Lowercased extension of a file name, if any.
fn file_extension(file_name: &str) -> Option<String> {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}
