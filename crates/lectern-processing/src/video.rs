//! Video transcoding adapter backed by an external ffmpeg process.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use tokio::io::AsyncReadExt;
use tokio::process::Command;
use tokio_util::sync::CancellationToken;

use crate::compressor::{CompressError, Compressor};

/// Validate that a tool path doesn't contain shell metacharacters or
/// dangerous sequences.
fn validate_tool_path(path: &str) -> Result<()> {
    let dangerous_chars = [';', '|', '&', '$', '`', '(', ')', '<', '>', '\n', '\r'];
    if path.chars().any(|c| dangerous_chars.contains(&c)) {
        return Err(anyhow!("Path contains dangerous characters: {}", path));
    }

    if path.contains("..") {
        return Err(anyhow!("Path contains directory traversal: {}", path));
    }

    Ok(())
}

/// Transcodes video uploads with a single fixed profile: 480p height
/// (aspect preserved), H.264 at CRF 28 with the fast preset, AAC audio at
/// 96 kbps, and `+faststart` so playback can begin before the full file
/// downloads.
pub struct VideoCompressor {
    ffmpeg_path: String,
    /// Transcode timeout in seconds. 0 = disabled.
    timeout_secs: u64,
    shutdown: CancellationToken,
}

impl VideoCompressor {
    pub fn new(
        ffmpeg_path: String,
        timeout_secs: u64,
        shutdown: CancellationToken,
    ) -> Result<Self> {
        validate_tool_path(&ffmpeg_path)?;

        Ok(Self {
            ffmpeg_path,
            timeout_secs,
            shutdown,
        })
    }

    fn build_args(input: &Path, output: &Path) -> Vec<String> {
        vec![
            "-i".to_string(),
            input.to_string_lossy().to_string(),
            "-vf".to_string(),
            "scale=-2:480".to_string(),
            "-c:v".to_string(),
            "libx264".to_string(),
            "-crf".to_string(),
            "28".to_string(),
            "-preset".to_string(),
            "fast".to_string(),
            "-c:a".to_string(),
            "aac".to_string(),
            "-b:a".to_string(),
            "96k".to_string(),
            "-movflags".to_string(),
            "+faststart".to_string(),
            "-y".to_string(),
            output.to_string_lossy().to_string(),
        ]
    }
}

#[async_trait]
impl Compressor for VideoCompressor {
    #[tracing::instrument(skip(self, input, output))]
    async fn compress(&self, input: &Path, output: &Path) -> Result<(), CompressError> {
        let args = Self::build_args(input, output);

        let mut child = Command::new(&self.ffmpeg_path)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()?;

        // Drain stderr concurrently; ffmpeg logs progress there and a full
        // pipe would block the child.
        let mut stderr_pipe = child
            .stderr
            .take()
            .ok_or_else(|| CompressError::Internal("ffmpeg stderr not captured".to_string()))?;
        let stderr_task = tokio::spawn(async move {
            let mut buf = Vec::new();
            stderr_pipe.read_to_end(&mut buf).await.ok();
            buf
        });

        tokio::select! {
            status = child.wait() => {
                let status = status?;
                let stderr = stderr_task.await.unwrap_or_default();
                if status.success() {
                    tracing::debug!(output = %output.display(), "Video transcode finished");
                    Ok(())
                } else {
                    let stderr = String::from_utf8_lossy(&stderr);
                    Err(CompressError::Transcode(stderr.trim().to_string()))
                }
            }
            _ = self.shutdown.cancelled() => {
                child.kill().await.ok();
                Err(CompressError::Cancelled)
            }
            _ = tokio::time::sleep(Duration::from_secs(self.timeout_secs)), if self.timeout_secs > 0 => {
                tracing::warn!(timeout_secs = self.timeout_secs, "Killing ffmpeg after timeout");
                child.kill().await.ok();
                Err(CompressError::TimedOut(self.timeout_secs))
            }
        }
    }
}
