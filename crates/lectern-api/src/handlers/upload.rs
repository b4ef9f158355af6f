//! Teacher upload: stage, compress, record.

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use crate::utils::upload::extract_upload_form;
use axum::{
    extract::{Multipart, State},
    Json,
};
use lectern_core::models::MediaKind;
use lectern_processing::{IngestReceipt, IngestRequest};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, ToSchema)]
pub struct UploadResponse {
    pub success: bool,
    pub file_id: Uuid,
    pub compressed_url: String,
    pub file_type: MediaKind,
    pub original_size: i64,
    pub compressed_size: i64,
    /// Space saved, e.g. `"60.00%"`. Negative when compression expanded the file.
    pub compression_ratio: String,
    pub message: String,
}

impl From<IngestReceipt> for UploadResponse {
    fn from(receipt: IngestReceipt) -> Self {
        Self {
            success: true,
            file_id: receipt.file_id,
            compressed_url: receipt.compressed_url,
            file_type: receipt.file_type,
            original_size: receipt.original_size,
            compressed_size: receipt.compressed_size,
            compression_ratio: receipt.compression_ratio,
            message: "File uploaded and compressed successfully".to_string(),
        }
    }
}

/// Accepts a multipart form with `file`, `subject`, and `topic` fields,
/// compresses the file by kind, and records the resource.
#[utoipa::path(
    post,
    path = "/teacher/upload",
    tag = "teacher",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "File uploaded and compressed", body = UploadResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 500, description = "Compression or persistence failure", body = ErrorResponse)
    )
)]
pub async fn upload_file(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, HttpAppError> {
    let form = extract_upload_form(multipart).await?;

    let (staged, original_name, content_type) = match form.file {
        Some(file) => {
            state
                .validator
                .validate(&file.file_name, &file.content_type, file.data.len())?;
            let staged = state
                .upload_store
                .stage(&file.file_name, &file.data)
                .await?;
            (Some(staged), file.file_name, file.content_type)
        }
        None => (None, String::new(), String::new()),
    };

    let receipt = state
        .pipeline
        .ingest(IngestRequest {
            staged,
            original_name,
            content_type,
            subject: form.subject,
            topic: form.topic,
        })
        .await?;

    Ok(Json(receipt.into()))
}
