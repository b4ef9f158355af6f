use chrono::Utc;
use lectern_core::models::{LiveClass, NewLiveClass};
use lectern_core::AppError;
use sqlx::{Sqlite, SqlitePool};
use uuid::Uuid;

const STATUS_ACTIVE: &str = "active";

/// Repository for live class announcements
#[derive(Clone)]
pub struct LiveClassRepository {
    pool: SqlitePool,
}

impl LiveClassRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Announce a live class, active as of now
    #[tracing::instrument(skip(self, class), fields(db.table = "live_classes", db.operation = "insert"))]
    pub async fn start(&self, class: NewLiveClass) -> Result<LiveClass, AppError> {
        let started = sqlx::query_as::<Sqlite, LiveClass>(
            r#"
            INSERT INTO live_classes (id, subject, topic, join_link, start_time, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, subject, topic, join_link, start_time, status
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&class.subject)
        .bind(&class.topic)
        .bind(&class.join_link)
        .bind(Utc::now())
        .bind(STATUS_ACTIVE)
        .fetch_one(&self.pool)
        .await?;

        Ok(started)
    }

    /// List joinable classes, most recently started first, optionally
    /// filtered by subject
    #[tracing::instrument(skip(self), fields(db.table = "live_classes", db.operation = "select"))]
    pub async fn active_classes(&self, subject: Option<&str>) -> Result<Vec<LiveClass>, AppError> {
        let classes = match subject {
            Some(subject) => {
                sqlx::query_as::<Sqlite, LiveClass>(
                    "SELECT id, subject, topic, join_link, start_time, status FROM live_classes WHERE status = $1 AND subject = $2 ORDER BY start_time DESC"
                )
                .bind(STATUS_ACTIVE)
                .bind(subject)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<Sqlite, LiveClass>(
                    "SELECT id, subject, topic, join_link, start_time, status FROM live_classes WHERE status = $1 ORDER BY start_time DESC"
                )
                .bind(STATUS_ACTIVE)
                .fetch_all(&self.pool)
                .await?
            }
        };

        Ok(classes)
    }
}
