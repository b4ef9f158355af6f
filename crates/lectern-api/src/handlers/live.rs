//! Live class sessions.

use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::handlers::resources::SubjectQuery;
use crate::state::AppState;
use crate::utils::non_empty;
use axum::{
    extract::{Query, State},
    Json,
};
use lectern_core::models::{LiveClassResponse, NewLiveClass};
use lectern_core::AppError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
pub struct StartClassRequest {
    pub subject: Option<String>,
    pub topic: Option<String>,
    pub join_link: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StartClassResponse {
    pub success: bool,
    pub class_id: Uuid,
    pub join_link: String,
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LiveClassListResponse {
    pub success: bool,
    pub count: usize,
    pub live_classes: Vec<LiveClassResponse>,
}

/// Announce a live class session.
#[utoipa::path(
    post,
    path = "/live/start",
    tag = "live",
    request_body = StartClassRequest,
    responses(
        (status = 200, description = "Live class started", body = StartClassResponse),
        (status = 400, description = "Missing fields", body = ErrorResponse),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn start_class(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<StartClassRequest>,
) -> Result<Json<StartClassResponse>, HttpAppError> {
    let (Some(subject), Some(topic), Some(join_link)) = (
        non_empty(request.subject),
        non_empty(request.topic),
        non_empty(request.join_link),
    ) else {
        return Err(
            AppError::InvalidInput("Subject, topic, and join_link are required".to_string()).into(),
        );
    };

    let class = state
        .live_classes
        .start(NewLiveClass {
            subject,
            topic,
            join_link,
        })
        .await?;
    tracing::info!(class_id = %class.id, subject = %class.subject, "Live class started");

    Ok(Json(StartClassResponse {
        success: true,
        class_id: class.id,
        join_link: class.join_link,
        message: "Live class started successfully".to_string(),
    }))
}

/// Active live class sessions, most recently started first.
#[utoipa::path(
    get,
    path = "/live/join",
    tag = "live",
    params(SubjectQuery),
    responses(
        (status = 200, description = "Active live classes", body = LiveClassListResponse),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn join_classes(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SubjectQuery>,
) -> Result<Json<LiveClassListResponse>, HttpAppError> {
    let live_classes: Vec<LiveClassResponse> = state
        .live_classes
        .active_classes(query.filter())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    tracing::debug!(count = live_classes.len(), "Fetched active live classes");
    Ok(Json(LiveClassListResponse {
        success: true,
        count: live_classes.len(),
        live_classes,
    }))
}
