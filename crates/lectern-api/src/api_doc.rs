//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;
use lectern_core::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Lectern API",
        version = "1.0.0",
        description = "Classroom resource sharing backend. Teachers upload lecture files that are compressed for low-bandwidth delivery; students list resources, watch video lectures, and join live classes."
    ),
    paths(
        handlers::index::api_index,
        handlers::health::health_check,
        handlers::upload::upload_file,
        handlers::resources::list_resources,
        handlers::resources::list_videos,
        handlers::live::start_class,
        handlers::live::join_classes,
        handlers::auth::signup,
        handlers::auth::verify_otp,
        handlers::auth::resend_otp,
        handlers::auth::login,
    ),
    components(schemas(
        models::MediaKind,
        models::ResourceResponse,
        models::LiveClassResponse,
        models::StudentResponse,
        handlers::health::HealthResponse,
        handlers::upload::UploadResponse,
        handlers::resources::ResourceListResponse,
        handlers::resources::VideoListResponse,
        handlers::live::StartClassRequest,
        handlers::live::StartClassResponse,
        handlers::live::LiveClassListResponse,
        handlers::auth::SignupRequest,
        handlers::auth::SignupResponse,
        handlers::auth::VerifyOtpRequest,
        handlers::auth::ResendOtpRequest,
        handlers::auth::LoginRequest,
        handlers::auth::LoginResponse,
        handlers::auth::MessageResponse,
        error::ErrorResponse,
    )),
    tags(
        (name = "teacher", description = "Upload and compression"),
        (name = "student", description = "Resource listings"),
        (name = "live", description = "Live class sessions"),
        (name = "auth", description = "Student accounts and OTP verification"),
        (name = "meta", description = "Service index and health")
    )
)]
pub struct ApiDoc;

/// Spec served at /api/openapi.json.
pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_includes_all_routes() {
        let spec = get_openapi_spec();
        for path in [
            "/teacher/upload",
            "/student/resources",
            "/student/videos",
            "/live/start",
            "/live/join",
            "/auth/student/signup",
            "/auth/student/verify-otp",
            "/auth/student/resend-otp",
            "/auth/student/login",
            "/health",
        ] {
            assert!(
                spec.paths.paths.contains_key(path),
                "OpenAPI spec is missing {}",
                path
            );
        }
    }
}
