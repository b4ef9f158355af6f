//! Upload validation

use lectern_core::models::MediaKind;
use lectern_core::AppError;

/// Validation errors for incoming uploads
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("File too large: {size} bytes (max: {max} bytes)")]
    FileTooLarge { size: usize, max: usize },

    #[error("Only video, PDF, DOCX, and PPT files are allowed")]
    UnsupportedType,

    #[error("Empty file")]
    EmptyFile,
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::FileTooLarge { .. } => AppError::PayloadTooLarge(err.to_string()),
            other => AppError::InvalidInput(other.to_string()),
        }
    }
}

/// Ingress gate for uploads: size bounds plus the accepted-kind check.
///
/// Kind acceptance reuses the classifier, so anything it can map to a
/// supported kind (by extension or by declared content-type) passes.
pub struct UploadValidator {
    max_file_size: usize,
}

impl UploadValidator {
    pub fn new(max_file_size: usize) -> Self {
        Self { max_file_size }
    }

    pub fn validate(
        &self,
        file_name: &str,
        content_type: &str,
        size: usize,
    ) -> Result<(), ValidationError> {
        if size == 0 {
            return Err(ValidationError::EmptyFile);
        }

        if size > self.max_file_size {
            return Err(ValidationError::FileTooLarge {
                size,
                max: self.max_file_size,
            });
        }

        if !MediaKind::is_supported_upload(file_name, content_type) {
            return Err(ValidationError::UnsupportedType);
        }

        Ok(())
    }
}
