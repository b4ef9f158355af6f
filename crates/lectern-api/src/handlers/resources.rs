//! Student-facing resource listings.

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use lectern_core::models::ResourceResponse;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub struct SubjectQuery {
    /// Restrict results to one subject.
    pub subject: Option<String>,
}

impl SubjectQuery {
    /// An empty `?subject=` means no filter, same as omitting it.
    pub fn filter(&self) -> Option<&str> {
        self.subject.as_deref().filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ResourceListResponse {
    pub success: bool,
    pub count: usize,
    pub resources: Vec<ResourceResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct VideoListResponse {
    pub success: bool,
    pub count: usize,
    pub videos: Vec<ResourceResponse>,
}

/// All resources, newest first.
#[utoipa::path(
    get,
    path = "/student/resources",
    tag = "student",
    params(SubjectQuery),
    responses(
        (status = 200, description = "Resources, newest first", body = ResourceListResponse),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn list_resources(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SubjectQuery>,
) -> Result<Json<ResourceListResponse>, HttpAppError> {
    let resources: Vec<ResourceResponse> = state
        .resources
        .list(query.filter())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    tracing::debug!(count = resources.len(), "Fetched resources");
    Ok(Json(ResourceListResponse {
        success: true,
        count: resources.len(),
        resources,
    }))
}

/// Video lectures only, newest first.
#[utoipa::path(
    get,
    path = "/student/videos",
    tag = "student",
    params(SubjectQuery),
    responses(
        (status = 200, description = "Video resources, newest first", body = VideoListResponse),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
pub async fn list_videos(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SubjectQuery>,
) -> Result<Json<VideoListResponse>, HttpAppError> {
    let videos: Vec<ResourceResponse> = state
        .resources
        .list_videos(query.filter())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    tracing::debug!(count = videos.len(), "Fetched videos");
    Ok(Json(VideoListResponse {
        success: true,
        count: videos.len(),
        videos,
    }))
}
