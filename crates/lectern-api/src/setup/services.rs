//! Service and repository initialization

use crate::services::{EmailService, SqlMetadataStore};
use crate::state::AppState;
use anyhow::Result;
use lectern_core::Config;
use lectern_db::{LiveClassRepository, OtpRepository, ResourceRepository, StudentRepository};
use lectern_processing::{
    CompressionDispatcher, IngestPipeline, MetadataStore, UploadValidator, VideoCompressor,
};
use lectern_storage::LocalUploadStore;
use sqlx::SqlitePool;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Wire every service and repository into the shared application state.
pub async fn initialize_services(config: &Config, pool: SqlitePool) -> Result<Arc<AppState>> {
    let shutdown = CancellationToken::new();

    let upload_store = LocalUploadStore::new(config.upload_dir()).await?;
    tracing::info!(
        upload_dir = %upload_store.upload_dir().display(),
        compressed_dir = %upload_store.compressed_dir().display(),
        "Upload store ready"
    );

    let resources = ResourceRepository::new(pool.clone());
    let live_classes = LiveClassRepository::new(pool.clone());
    let students = StudentRepository::new(pool.clone());
    let otps = OtpRepository::new(pool.clone());

    let video = VideoCompressor::new(
        config.ffmpeg_path().to_string(),
        config.ffmpeg_timeout_secs(),
        shutdown.clone(),
    )?;
    let dispatcher = CompressionDispatcher::new(video);
    let metadata: Arc<dyn MetadataStore> = Arc::new(SqlMetadataStore::new(resources.clone()));
    let pipeline = IngestPipeline::new(upload_store.clone(), dispatcher, metadata);
    let validator = UploadValidator::new(config.max_upload_size_bytes());

    let email = EmailService::from_config(config);
    if email.is_none() {
        tracing::warn!("SMTP not configured; verification codes will be logged instead of emailed");
    }

    Ok(Arc::new(AppState {
        config: config.clone(),
        pool,
        upload_store,
        validator,
        pipeline,
        resources,
        live_classes,
        students,
        otps,
        email,
        shutdown,
    }))
}
