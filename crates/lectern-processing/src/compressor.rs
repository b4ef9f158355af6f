//! Shared compression adapter interface

use std::path::Path;

use async_trait::async_trait;

/// Errors a compression adapter can signal.
///
/// Every variant is recoverable at the dispatcher level: the dispatcher
/// responds to any of these by falling back to a passthrough copy.
#[derive(Debug, thiserror::Error)]
pub enum CompressError {
    #[error("Transcode failed: {0}")]
    Transcode(String),

    #[error("Transcode timed out after {0}s")]
    TimedOut(u64),

    #[error("Transcode cancelled by shutdown")]
    Cancelled,

    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// A kind-specific compression strategy.
///
/// Given a source file and an output path, produce a (hopefully smaller)
/// file at the output path. Implementations make no partial-output
/// guarantee on failure; the dispatcher's fallback is responsible for
/// ensuring a usable artifact exists.
#[async_trait]
pub trait Compressor: Send + Sync {
    async fn compress(&self, input: &Path, output: &Path) -> Result<(), CompressError>;
}
