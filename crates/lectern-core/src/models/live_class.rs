use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// An announced live class session with a join link.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct LiveClass {
    pub id: Uuid,
    pub subject: String,
    pub topic: String,
    pub join_link: String,
    pub start_time: DateTime<Utc>,
    /// `active` while the session is joinable.
    pub status: String,
}

/// Fields for announcing a new live class.
#[derive(Debug, Clone)]
pub struct NewLiveClass {
    pub subject: String,
    pub topic: String,
    pub join_link: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LiveClassResponse {
    pub id: Uuid,
    pub subject: String,
    pub topic: String,
    pub join_link: String,
    pub start_time: DateTime<Utc>,
    pub status: String,
}

impl From<LiveClass> for LiveClassResponse {
    fn from(class: LiveClass) -> Self {
        LiveClassResponse {
            id: class.id,
            subject: class.subject,
            topic: class.topic,
            join_link: class.join_link,
            start_time: class.start_time,
            status: class.status,
        }
    }
}
