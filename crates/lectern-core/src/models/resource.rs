use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::media_kind::MediaKind;

/// A compressed learning resource available to students.
///
/// Created exactly once per successful upload and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Resource {
    pub id: Uuid,
    pub file_name: String,
    pub file_type: MediaKind,
    pub subject: String,
    pub topic: String,
    pub upload_date: DateTime<Utc>,
    /// Public location of the compressed artifact, e.g. `/uploads/compressed/...`.
    pub compressed_url: String,
    pub original_size: i64,
    pub compressed_size: i64,
}

/// Fields for persisting a freshly compressed resource.
#[derive(Debug, Clone)]
pub struct NewResource {
    pub file_name: String,
    pub file_type: MediaKind,
    pub subject: String,
    pub topic: String,
    pub upload_date: DateTime<Utc>,
    pub compressed_url: String,
    pub original_size: i64,
    pub compressed_size: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ResourceResponse {
    pub id: Uuid,
    pub file_name: String,
    pub file_type: MediaKind,
    pub subject: String,
    pub topic: String,
    pub upload_date: DateTime<Utc>,
    pub compressed_url: String,
    pub original_size: i64,
    pub compressed_size: i64,
}

impl From<Resource> for ResourceResponse {
    fn from(resource: Resource) -> Self {
        ResourceResponse {
            id: resource.id,
            file_name: resource.file_name,
            file_type: resource.file_type,
            subject: resource.subject,
            topic: resource.topic,
            upload_date: resource.upload_date,
            compressed_url: resource.compressed_url,
            original_size: resource.original_size,
            compressed_size: resource.compressed_size,
        }
    }
}
