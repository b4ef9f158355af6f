//! Compression strategy dispatch

use std::path::{Path, PathBuf};

use lectern_core::models::MediaKind;
use lectern_core::AppError;

use crate::compressor::Compressor;
use crate::passthrough::PassthroughCopier;
use crate::pdf::PdfOptimizer;
use crate::video::VideoCompressor;

/// What one dispatch left at the output path.
#[derive(Debug)]
pub struct CompressionOutcome {
    pub output_path: PathBuf,
    /// Actual bytes on disk, not an estimate.
    pub output_size: u64,
    /// Adapter failure that forced the fallback copy, when one occurred.
    pub fallback_cause: Option<String>,
}

impl CompressionOutcome {
    /// True when the artifact is a plain copy of the input because the
    /// kind-specific adapter failed.
    pub fn fell_back(&self) -> bool {
        self.fallback_cause.is_some()
    }
}

/// Routes a classified upload to its compression adapter and owns the
/// fallback-to-copy policy.
///
/// On any adapter failure the original file is copied to the output path
/// instead; only a failure of that fallback copy itself propagates.
pub struct CompressionDispatcher {
    video: VideoCompressor,
    pdf: PdfOptimizer,
    passthrough: PassthroughCopier,
}

impl CompressionDispatcher {
    pub fn new(video: VideoCompressor) -> Self {
        Self {
            video,
            pdf: PdfOptimizer,
            passthrough: PassthroughCopier,
        }
    }

    /// Produce a file at `output`. Guaranteed to either leave an artifact
    /// at the output path or return an error.
    pub async fn compress(
        &self,
        kind: MediaKind,
        input: &Path,
        output: &Path,
    ) -> Result<CompressionOutcome, AppError> {
        let attempt = match kind {
            MediaKind::Video => self.video.compress(input, output).await,
            MediaKind::Pdf => self.pdf.compress(input, output).await,
            MediaKind::Document | MediaKind::Presentation | MediaKind::Other => {
                self.passthrough.compress(input, output).await
            }
        };

        let fallback_cause = match attempt {
            Ok(()) => None,
            Err(err) => {
                tracing::warn!(kind = %kind, error = %err, "Compression failed, copying original file");
                self.passthrough
                    .compress(input, output)
                    .await
                    .map_err(|fallback_err| {
                        AppError::MediaConversionError(format!(
                            "Fallback copy failed: {}",
                            fallback_err
                        ))
                    })?;
                Some(err.to_string())
            }
        };

        let output_size = tokio::fs::metadata(output)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to read artifact size: {}", e)))?
            .len();

        Ok(CompressionOutcome {
            output_path: output.to_path_buf(),
            output_size,
            fallback_cause,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_util::sync::CancellationToken;

    fn dispatcher_without_ffmpeg() -> CompressionDispatcher {
        let video = VideoCompressor::new(
            "/nonexistent-ffmpeg-binary".to_string(),
            0,
            CancellationToken::new(),
        )
        .unwrap();
        CompressionDispatcher::new(video)
    }

    #[tokio::test]
    async fn test_documents_are_copied_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("slides.pptx");
        let output = dir.path().join("slides-compressed.pptx");
        tokio::fs::write(&input, b"presentation bytes").await.unwrap();

        let outcome = dispatcher_without_ffmpeg()
            .compress(MediaKind::Presentation, &input, &output)
            .await
            .unwrap();

        assert_eq!(
            tokio::fs::read(&output).await.unwrap(),
            b"presentation bytes"
        );
        assert_eq!(outcome.output_path, output);
        assert_eq!(outcome.output_size, b"presentation bytes".len() as u64);
        assert!(!outcome.fell_back());
    }

    #[tokio::test]
    async fn test_video_failure_falls_back_to_byte_identical_copy() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("clip.mp4");
        let output = dir.path().join("clip-compressed.mp4");
        tokio::fs::write(&input, b"raw mp4 bytes").await.unwrap();

        let outcome = dispatcher_without_ffmpeg()
            .compress(MediaKind::Video, &input, &output)
            .await
            .unwrap();

        assert_eq!(tokio::fs::read(&output).await.unwrap(), b"raw mp4 bytes");
        assert_eq!(outcome.output_size, b"raw mp4 bytes".len() as u64);
        assert!(outcome.fell_back());
        assert!(outcome.fallback_cause.is_some());
    }

    #[tokio::test]
    async fn test_corrupt_pdf_falls_back_to_copy() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("broken.pdf");
        let output = dir.path().join("broken-compressed.pdf");
        tokio::fs::write(&input, b"not a pdf").await.unwrap();

        let outcome = dispatcher_without_ffmpeg()
            .compress(MediaKind::Pdf, &input, &output)
            .await
            .unwrap();

        assert_eq!(tokio::fs::read(&output).await.unwrap(), b"not a pdf");
        assert!(outcome.fell_back());
    }

    #[tokio::test]
    async fn test_fallback_failure_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("ghost.mp4");
        let output = dir.path().join("ghost-compressed.mp4");

        let err = dispatcher_without_ffmpeg()
            .compress(MediaKind::Video, &input, &output)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::MediaConversionError(_)));
    }
}
