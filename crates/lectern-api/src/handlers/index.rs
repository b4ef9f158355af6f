//! API index.

use axum::Json;

/// Endpoint catalog served at the root.
#[utoipa::path(
    get,
    path = "/",
    tag = "meta",
    responses((status = 200, description = "API index"))
)]
pub async fn api_index() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Lectern Backend API",
        "version": "1.0.0",
        "endpoints": {
            "teacher": [
                "POST /teacher/upload - Upload and compress files"
            ],
            "student": [
                "GET /student/resources?subject=... - Fetch all resources",
                "GET /student/videos?subject=... - Fetch video lectures"
            ],
            "live": [
                "POST /live/start - Start live class",
                "GET /live/join?subject=... - Get active live classes"
            ]
        }
    }))
}
