//! Metadata store seam

use async_trait::async_trait;
use lectern_core::models::{NewResource, Resource};
use lectern_core::AppError;

/// External store for resource records.
///
/// The pipeline issues exactly one create per successful run and never
/// updates or deletes existing records; the store is assumed to serialize
/// its own writes.
#[async_trait]
pub trait MetadataStore: Send + Sync {
    async fn create_resource(&self, resource: NewResource) -> Result<Resource, AppError>;
}
