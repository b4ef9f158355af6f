use lectern_core::models::{MediaKind, NewResource, Resource};
use lectern_core::AppError;
use sqlx::{Sqlite, SqlitePool};
use uuid::Uuid;

/// Repository for compressed learning resources
#[derive(Clone)]
pub struct ResourceRepository {
    pool: SqlitePool,
}

impl ResourceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Persist a freshly compressed resource
    #[tracing::instrument(skip(self, resource), fields(db.table = "resources", db.operation = "insert"))]
    pub async fn create(&self, resource: NewResource) -> Result<Resource, AppError> {
        let created = sqlx::query_as::<Sqlite, Resource>(
            r#"
            INSERT INTO resources (id, file_name, file_type, subject, topic, upload_date, compressed_url, original_size, compressed_size)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, file_name, file_type, subject, topic, upload_date, compressed_url, original_size, compressed_size
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&resource.file_name)
        .bind(resource.file_type)
        .bind(&resource.subject)
        .bind(&resource.topic)
        .bind(resource.upload_date)
        .bind(&resource.compressed_url)
        .bind(resource.original_size)
        .bind(resource.compressed_size)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// List resources newest first, optionally filtered by subject
    #[tracing::instrument(skip(self), fields(db.table = "resources", db.operation = "select"))]
    pub async fn list(&self, subject: Option<&str>) -> Result<Vec<Resource>, AppError> {
        let resources = match subject {
            Some(subject) => {
                sqlx::query_as::<Sqlite, Resource>(
                    "SELECT id, file_name, file_type, subject, topic, upload_date, compressed_url, original_size, compressed_size FROM resources WHERE subject = $1 ORDER BY upload_date DESC"
                )
                .bind(subject)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<Sqlite, Resource>(
                    "SELECT id, file_name, file_type, subject, topic, upload_date, compressed_url, original_size, compressed_size FROM resources ORDER BY upload_date DESC"
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(resources)
    }

    /// List video resources newest first, optionally filtered by subject
    #[tracing::instrument(skip(self), fields(db.table = "resources", db.operation = "select"))]
    pub async fn list_videos(&self, subject: Option<&str>) -> Result<Vec<Resource>, AppError> {
        let videos = match subject {
            Some(subject) => {
                sqlx::query_as::<Sqlite, Resource>(
                    "SELECT id, file_name, file_type, subject, topic, upload_date, compressed_url, original_size, compressed_size FROM resources WHERE file_type = $1 AND subject = $2 ORDER BY upload_date DESC"
                )
                .bind(MediaKind::Video)
                .bind(subject)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<Sqlite, Resource>(
                    "SELECT id, file_name, file_type, subject, topic, upload_date, compressed_url, original_size, compressed_size FROM resources WHERE file_type = $1 ORDER BY upload_date DESC"
                )
                .bind(MediaKind::Video)
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(videos)
    }
}
