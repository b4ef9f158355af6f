//! Lectern Processing Library
//!
//! This crate implements the upload ingestion pipeline: validating an
//! incoming file, classifying it, compressing it with a kind-specific
//! adapter, and recording the resulting artifact.
//!
//! Compression never loses an upload: every adapter failure falls back to a
//! byte-for-byte copy of the original, so the worst case is an uncompressed
//! artifact, not a missing one.

pub mod compressor;
pub mod dispatcher;
pub mod metadata_store;
pub mod passthrough;
pub mod pdf;
pub mod pipeline;
pub mod validator;
pub mod video;

// Re-export commonly used types
pub use compressor::{CompressError, Compressor};
pub use dispatcher::{CompressionDispatcher, CompressionOutcome};
pub use metadata_store::MetadataStore;
pub use passthrough::PassthroughCopier;
pub use pdf::PdfOptimizer;
pub use pipeline::{compression_ratio, IngestPipeline, IngestReceipt, IngestRequest};
pub use validator::{UploadValidator, ValidationError};
pub use video::VideoCompressor;
