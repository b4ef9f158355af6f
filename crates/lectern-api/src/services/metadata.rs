//! Resource metadata persistence for the ingestion pipeline.

use async_trait::async_trait;
use lectern_core::models::{NewResource, Resource};
use lectern_core::AppError;
use lectern_db::ResourceRepository;
use lectern_processing::MetadataStore;

/// `MetadataStore` backed by the resources table.
#[derive(Clone)]
pub struct SqlMetadataStore {
    resources: ResourceRepository,
}

impl SqlMetadataStore {
    pub fn new(resources: ResourceRepository) -> Self {
        Self { resources }
    }
}

#[async_trait]
impl MetadataStore for SqlMetadataStore {
    async fn create_resource(&self, resource: NewResource) -> Result<Resource, AppError> {
        self.resources.create(resource).await
    }
}
