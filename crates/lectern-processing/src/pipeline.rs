//! Upload ingestion pipeline
//!
//! Orchestrates one upload end to end: validate the request, classify the
//! staged file, compress it through the dispatcher, measure the artifact,
//! delete the staged original, and persist the resource record.
//!
//! Steps are sequential within a request; concurrent requests are isolated
//! only by per-request unique staged names.

use std::sync::Arc;

use chrono::Utc;
use lectern_core::models::{MediaKind, NewResource};
use lectern_core::AppError;
use lectern_storage::{naming, LocalUploadStore, StagedUpload};
use uuid::Uuid;

use crate::dispatcher::CompressionDispatcher;
use crate::metadata_store::MetadataStore;

/// One upload request as handed over by the HTTP layer.
#[derive(Debug)]
pub struct IngestRequest {
    /// Already-staged file, if the request carried one.
    pub staged: Option<StagedUpload>,
    /// Client-supplied original file name, recorded on the resource.
    pub original_name: String,
    pub content_type: String,
    pub subject: Option<String>,
    pub topic: Option<String>,
}

/// Outcome of a successful ingestion run.
#[derive(Debug, Clone)]
pub struct IngestReceipt {
    pub file_id: Uuid,
    pub compressed_url: String,
    pub file_type: MediaKind,
    pub original_size: i64,
    pub compressed_size: i64,
    /// Formatted percentage, e.g. `60.00%`. Negative when compression
    /// expanded the file.
    pub compression_ratio: String,
}

/// Percentage saved by compression, formatted to two decimals.
pub fn compression_ratio(original_size: i64, compressed_size: i64) -> String {
    let ratio = (1.0 - compressed_size as f64 / original_size as f64) * 100.0;
    format!("{:.2}%", ratio)
}

/// Upload ingestion orchestrator.
pub struct IngestPipeline {
    store: LocalUploadStore,
    dispatcher: CompressionDispatcher,
    metadata: Arc<dyn MetadataStore>,
}

impl IngestPipeline {
    pub fn new(
        store: LocalUploadStore,
        dispatcher: CompressionDispatcher,
        metadata: Arc<dyn MetadataStore>,
    ) -> Self {
        Self {
            store,
            dispatcher,
            metadata,
        }
    }

    /// Run the full ingestion protocol for one request.
    ///
    /// Validation failures delete the staged file and surface as 400-class
    /// errors; once an artifact exists the staged original is deleted
    /// unconditionally before the resource record is written, so a fatal
    /// failure never leaves a record pointing at a missing artifact.
    #[tracing::instrument(skip(self, request), fields(file = %request.original_name))]
    pub async fn ingest(&self, request: IngestRequest) -> Result<IngestReceipt, AppError> {
        let staged = request
            .staged
            .ok_or_else(|| AppError::InvalidInput("No file uploaded".to_string()))?;

        let (subject, topic) = match (
            non_empty(request.subject.as_deref()),
            non_empty(request.topic.as_deref()),
        ) {
            (Some(subject), Some(topic)) => (subject.to_string(), topic.to_string()),
            _ => {
                if let Err(err) = self.store.remove(&staged.path).await {
                    tracing::warn!(error = %err, "Failed to clean up rejected upload");
                }
                return Err(AppError::InvalidInput(
                    "Subject and topic are required".to_string(),
                ));
            }
        };

        let kind = MediaKind::from_upload(&staged.file_name, &request.content_type);
        let original_size = staged.size as i64;
        tracing::info!(kind = %kind, size = original_size, "File type detected");

        let compressed_name = naming::compressed_file_name(&staged.file_name);
        let output_path = self.store.compressed_path(&compressed_name);

        let outcome = self
            .dispatcher
            .compress(kind, &staged.path, &output_path)
            .await?;

        let compressed_size = outcome.output_size as i64;
        let ratio = compression_ratio(original_size, compressed_size);
        tracing::info!(
            ratio = %ratio,
            compressed_size,
            fell_back = outcome.fell_back(),
            "Compression completed"
        );

        // The artifact exists; the staged original goes away before the
        // record is written. A failed delete is fatal and leaves no record.
        self.store.remove(&staged.path).await?;

        let resource = self
            .metadata
            .create_resource(NewResource {
                file_name: request.original_name,
                file_type: kind,
                subject,
                topic,
                upload_date: Utc::now(),
                compressed_url: naming::public_url(&compressed_name),
                original_size,
                compressed_size,
            })
            .await?;

        tracing::info!(resource_id = %resource.id, "File uploaded successfully");

        Ok(IngestReceipt {
            file_id: resource.id,
            compressed_url: resource.compressed_url,
            file_type: kind,
            original_size,
            compressed_size,
            compression_ratio: ratio,
        })
    }
}

/// Present and non-empty, or treated as missing.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
