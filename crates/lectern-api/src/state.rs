//! Shared application state.
//!
//! One `AppState` behind an `Arc` carries the configuration, the database
//! pool, the upload pipeline, and every repository the handlers need.

use crate::services::EmailService;
use lectern_core::Config;
use lectern_db::{LiveClassRepository, OtpRepository, ResourceRepository, StudentRepository};
use lectern_processing::{IngestPipeline, UploadValidator};
use lectern_storage::LocalUploadStore;
use sqlx::SqlitePool;
use tokio_util::sync::CancellationToken;

pub struct AppState {
    pub config: Config,
    pub pool: SqlitePool,
    pub upload_store: LocalUploadStore,
    pub validator: UploadValidator,
    pub pipeline: IngestPipeline,
    pub resources: ResourceRepository,
    pub live_classes: LiveClassRepository,
    pub students: StudentRepository,
    pub otps: OtpRepository,
    /// `None` when SMTP is not configured; OTPs are then logged instead.
    pub email: Option<EmailService>,
    /// Cancelled on SIGINT/SIGTERM so in-flight transcodes stop early.
    pub shutdown: CancellationToken,
}
