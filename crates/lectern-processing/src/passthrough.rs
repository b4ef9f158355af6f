//! Passthrough copy adapter

use std::path::Path;

use async_trait::async_trait;
use tokio::fs;

use crate::compressor::{CompressError, Compressor};

/// Byte-for-byte copy, used for kinds with no dedicated compressor and as
/// the universal fallback when a compressor fails.
#[derive(Debug, Clone, Default)]
pub struct PassthroughCopier;

#[async_trait]
impl Compressor for PassthroughCopier {
    async fn compress(&self, input: &Path, output: &Path) -> Result<(), CompressError> {
        if let Some(parent) = output.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::copy(input, output).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_copy_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("notes.docx");
        let output = dir.path().join("out/notes-compressed.docx");
        tokio::fs::write(&input, b"office document bytes").await.unwrap();

        PassthroughCopier.compress(&input, &output).await.unwrap();

        let copied = tokio::fs::read(&output).await.unwrap();
        assert_eq!(copied, b"office document bytes");

        // Re-running over the same pair leaves the same bytes.
        PassthroughCopier.compress(&input, &output).await.unwrap();
        assert_eq!(
            tokio::fs::read(&output).await.unwrap(),
            b"office document bytes"
        );
    }

    #[tokio::test]
    async fn test_copy_creates_missing_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("a.bin");
        let output = dir.path().join("deep/nested/a-compressed.bin");
        tokio::fs::write(&input, b"x").await.unwrap();

        PassthroughCopier.compress(&input, &output).await.unwrap();
        assert!(output.is_file());
    }

    #[tokio::test]
    async fn test_missing_source_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("absent.bin");
        let output = dir.path().join("out.bin");

        let err = PassthroughCopier.compress(&input, &output).await.unwrap_err();
        assert!(matches!(err, CompressError::Io(_)));
    }
}
