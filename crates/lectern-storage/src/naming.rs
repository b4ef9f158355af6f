//! File naming rules
//!
//! All backends of the upload flow agree on these names: a staged upload is
//! `{millis}-{random}-{sanitized original}`, its compressed artifact keeps
//! the staged base with a `-compressed` marker before the extension, and
//! artifacts are served under [`COMPRESSED_URL_PREFIX`].

use std::path::Path;

use rand::Rng;

use crate::error::{StorageError, StorageResult};

/// URL prefix under which compressed artifacts are served.
pub const COMPRESSED_URL_PREFIX: &str = "/uploads/compressed";

const MAX_FILENAME_LENGTH: usize = 255;

/// Sanitize a client-supplied file name down to a safe single path component.
///
/// Path traversal sequences are rejected outright; any remaining character
/// outside `[A-Za-z0-9._-]` is replaced with `_`. Degenerate results fall
/// back to `file`.
pub fn sanitize_file_name(file_name: &str) -> StorageResult<String> {
    if file_name.contains("..") {
        return Err(StorageError::InvalidFilename(
            "Filename contains invalid path traversal".to_string(),
        ));
    }

    let path = Path::new(file_name);
    let file_name_only = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(file_name);

    let sanitized: String = file_name_only
        .chars()
        .take(MAX_FILENAME_LENGTH)
        .map(|c| {
            if c.is_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();

    if sanitized.trim().is_empty() || sanitized.len() < 3 {
        return Ok("file".to_string());
    }

    Ok(sanitized)
}

/// Unique name for a staged upload: millisecond timestamp plus a random
/// suffix plus the sanitized original name.
pub fn staged_file_name(sanitized_name: &str) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let suffix: u32 = rand::rng().random_range(0..1_000_000_000);
    format!("{}-{}-{}", millis, suffix, sanitized_name)
}

/// Output name for a staged upload's compressed artifact: the staged base
/// name with a `-compressed` marker, preserving the original extension.
pub fn compressed_file_name(staged_name: &str) -> String {
    let path = Path::new(staged_name);
    match (
        path.file_stem().and_then(|s| s.to_str()),
        path.extension().and_then(|e| e.to_str()),
    ) {
        (Some(stem), Some(ext)) => format!("{}-compressed.{}", stem, ext),
        _ => format!("{}-compressed", staged_name),
    }
}

/// Public URL at which a compressed artifact is served.
pub fn public_url(compressed_name: &str) -> String {
    format!("{}/{}", COMPRESSED_URL_PREFIX, compressed_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_rejects_path_traversal() {
        assert!(sanitize_file_name("..").is_err());
        assert!(sanitize_file_name("foo/../bar").is_err());
        assert!(sanitize_file_name("../../etc/passwd").is_err());
    }

    #[test]
    fn sanitize_accepts_valid_names() {
        assert_eq!(sanitize_file_name("lecture.mp4").unwrap(), "lecture.mp4");
        assert_eq!(
            sanitize_file_name("my-notes_1.pdf").unwrap(),
            "my-notes_1.pdf"
        );
    }

    #[test]
    fn sanitize_strips_directories_and_odd_characters() {
        assert_eq!(
            sanitize_file_name("dir/sub/notes week 1.pdf").unwrap(),
            "notes_week_1.pdf"
        );
    }

    #[test]
    fn sanitize_falls_back_on_degenerate_names() {
        assert_eq!(sanitize_file_name("").unwrap(), "file");
        assert_eq!(sanitize_file_name("a").unwrap(), "file");
    }

    #[test]
    fn staged_names_are_unique_per_call() {
        let a = staged_file_name("lecture.mp4");
        let b = staged_file_name("lecture.mp4");
        assert_ne!(a, b);
        assert!(a.ends_with("-lecture.mp4"));
    }

    #[test]
    fn compressed_name_keeps_extension() {
        assert_eq!(
            compressed_file_name("171234-5678-lecture.mp4"),
            "171234-5678-lecture-compressed.mp4"
        );
        assert_eq!(compressed_file_name("readme"), "readme-compressed");
    }

    #[test]
    fn public_url_uses_compressed_prefix() {
        assert_eq!(
            public_url("lecture-compressed.mp4"),
            "/uploads/compressed/lecture-compressed.mp4"
        );
    }
}
