//! Common utilities for the file upload handler

use axum::extract::Multipart;
use lectern_core::AppError;

/// Parsed multipart upload form.
#[derive(Debug)]
pub struct UploadForm {
    pub file: Option<UploadedFile>,
    pub subject: Option<String>,
    pub topic: Option<String>,
}

/// The raw file part of the form.
#[derive(Debug)]
pub struct UploadedFile {
    pub data: Vec<u8>,
    pub file_name: String,
    pub content_type: String,
}

/// Extract the `file`, `subject`, and `topic` fields from a multipart form.
/// Only one field named "file" is accepted; multiple file fields are rejected.
/// A missing file is not an error here; the pipeline reports it.
pub async fn extract_upload_form(mut multipart: Multipart) -> Result<UploadForm, AppError> {
    let mut file: Option<UploadedFile> = None;
    let mut subject: Option<String> = None;
    let mut topic: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read multipart: {}", e)))?
    {
        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();

        match field_name.as_str() {
            "file" => {
                if file.is_some() {
                    return Err(AppError::InvalidInput(
                        "Multiple file fields are not allowed; send exactly one field named 'file'"
                            .to_string(),
                    ));
                }
                let file_name = field
                    .file_name()
                    .map(|s: &str| s.to_string())
                    .unwrap_or_else(|| "unknown".to_string());
                let content_type = field
                    .content_type()
                    .map(|s: &str| s.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());

                let data = field.bytes().await.map_err(|e| {
                    AppError::InvalidInput(format!("Failed to read file data: {}", e))
                })?;

                file = Some(UploadedFile {
                    data: data.to_vec(),
                    file_name,
                    content_type,
                });
            }
            "subject" => {
                subject = Some(field.text().await.map_err(|e| {
                    AppError::InvalidInput(format!("Failed to read subject field: {}", e))
                })?);
            }
            "topic" => {
                topic = Some(field.text().await.map_err(|e| {
                    AppError::InvalidInput(format!("Failed to read topic field: {}", e))
                })?);
            }
            _ => {}
        }
    }

    Ok(UploadForm {
        file,
        subject,
        topic,
    })
}
