//! Lectern Storage Library
//!
//! This crate owns the on-disk layout for uploads: raw files are staged in
//! the upload directory under a per-request unique name, compressed
//! artifacts land in a `compressed/` subdirectory and are addressable at
//! `/uploads/compressed/<name>`.
//!
//! Staged names embed a timestamp and a random suffix so concurrent
//! uploads of the same file never collide; unique naming is the only
//! concurrency safety net, there is no locking.

pub mod error;
pub mod local;
pub mod naming;

// Re-export commonly used types
pub use error::{StorageError, StorageResult};
pub use local::{LocalUploadStore, StagedUpload};
pub use naming::{compressed_file_name, public_url, sanitize_file_name, COMPRESSED_URL_PREFIX};
