use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::error::{StorageError, StorageResult};
use crate::naming;

/// Local filesystem store for staged uploads and compressed artifacts.
///
/// Raw uploads are staged directly in the upload directory; compressed
/// outputs go to a `compressed/` subdirectory that is also served
/// statically by the HTTP layer.
#[derive(Clone)]
pub struct LocalUploadStore {
    upload_dir: PathBuf,
    compressed_dir: PathBuf,
}

/// Handle to a staged upload awaiting compression.
#[derive(Debug, Clone)]
pub struct StagedUpload {
    /// Unique staged file name, e.g. `1714003200123-48233-lecture.pdf`.
    pub file_name: String,
    /// Absolute or upload-dir-relative path of the staged file.
    pub path: PathBuf,
    pub size: u64,
}

impl LocalUploadStore {
    /// Create a store rooted at `upload_dir`, creating both the upload and
    /// compressed directories if absent.
    pub async fn new(upload_dir: impl Into<PathBuf>) -> StorageResult<Self> {
        let upload_dir = upload_dir.into();
        let compressed_dir = upload_dir.join("compressed");

        fs::create_dir_all(&compressed_dir).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create upload directories under {}: {}",
                upload_dir.display(),
                e
            ))
        })?;

        Ok(LocalUploadStore {
            upload_dir,
            compressed_dir,
        })
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    pub fn compressed_dir(&self) -> &Path {
        &self.compressed_dir
    }

    /// Stage raw upload bytes under a fresh unique name. The file is synced
    /// to disk before the handle is returned.
    pub async fn stage(&self, original_name: &str, data: &[u8]) -> StorageResult<StagedUpload> {
        let sanitized = naming::sanitize_file_name(original_name)?;
        let file_name = naming::staged_file_name(&sanitized);
        let path = self.upload_dir.join(&file_name);

        let mut file = fs::File::create(&path)
            .await
            .map_err(|e| StorageError::StageFailed(format!("{}: {}", path.display(), e)))?;
        file.write_all(data)
            .await
            .map_err(|e| StorageError::StageFailed(format!("{}: {}", path.display(), e)))?;
        file.sync_all()
            .await
            .map_err(|e| StorageError::StageFailed(format!("{}: {}", path.display(), e)))?;

        tracing::debug!(staged = %path.display(), size = data.len(), "Staged upload");

        Ok(StagedUpload {
            file_name,
            path,
            size: data.len() as u64,
        })
    }

    /// Path in the compressed directory for the given artifact name.
    pub fn compressed_path(&self, compressed_name: &str) -> PathBuf {
        self.compressed_dir.join(compressed_name)
    }

    /// Remove a staged file.
    pub async fn remove(&self, path: &Path) -> StorageResult<()> {
        fs::remove_file(path)
            .await
            .map_err(|e| StorageError::DeleteFailed(format!("{}: {}", path.display(), e)))?;
        tracing::debug!(removed = %path.display(), "Removed staged upload");
        Ok(())
    }
}
