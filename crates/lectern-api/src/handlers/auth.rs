//! Student accounts: signup, OTP verification, login.

use crate::error::{ErrorResponse, HttpAppError, ValidatedJson};
use crate::state::AppState;
use crate::utils::non_empty;
use axum::{extract::State, Json};
use chrono::{Duration, Utc};
use lectern_core::models::{NewStudent, StudentResponse};
use lectern_core::AppError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

const BCRYPT_COST: u32 = 10;
const OTP_EXPIRY_MINUTES: i64 = 10;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SignupRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SignupResponse {
    pub success: bool,
    pub message: String,
    pub student_id: Uuid,
    pub email: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct VerifyOtpRequest {
    pub email: Option<String>,
    pub otp: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ResendOtpRequest {
    pub email: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub student: StudentResponse,
}

fn generate_otp() -> String {
    rand::rng().random_range(100_000..1_000_000).to_string()
}

/// Sends the code by email, or logs it when SMTP is not configured so
/// development setups can still complete verification.
async fn deliver_otp(state: &AppState, email: &str, otp: &str) -> Result<(), AppError> {
    match &state.email {
        Some(service) => service.send_otp(email, otp).await,
        None => {
            tracing::warn!(email = %email, otp = %otp, "SMTP not configured, logging OTP instead of emailing");
            Ok(())
        }
    }
}

// bcrypt is CPU-bound; keep it off the async workers.
async fn hash_password(password: String) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || bcrypt::hash(password, BCRYPT_COST))
        .await
        .map_err(|e| AppError::Internal(format!("Password hashing task failed: {}", e)))?
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
}

async fn verify_password(password: String, hash: String) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash))
        .await
        .map_err(|e| AppError::Internal(format!("Password verification task failed: {}", e)))?
        .map_err(|e| AppError::Internal(format!("Failed to verify password: {}", e)))
}

/// Register a new student account and send a verification OTP.
#[utoipa::path(
    post,
    path = "/auth/student/signup",
    tag = "auth",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "Account created, OTP sent", body = SignupResponse),
        (status = 400, description = "Missing or invalid fields", body = ErrorResponse),
        (status = 500, description = "OTP email failed", body = ErrorResponse)
    )
)]
pub async fn signup(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<SignupRequest>,
) -> Result<Json<SignupResponse>, HttpAppError> {
    let (Some(username), Some(password), Some(name), Some(phone), Some(email)) = (
        non_empty(request.username),
        non_empty(request.password),
        non_empty(request.name),
        non_empty(request.phone),
        non_empty(request.email),
    ) else {
        return Err(AppError::InvalidInput("All fields are required".to_string()).into());
    };
    tracing::info!(username = %username, email = %email, "Signup attempt");

    if password.len() < 6 {
        return Err(
            AppError::InvalidInput("Password must be at least 6 characters".to_string()).into(),
        );
    }

    if state.students.find_by_username(&username).await?.is_some() {
        return Err(AppError::InvalidInput("Username already exists".to_string()).into());
    }
    if state.students.find_by_email(&email).await?.is_some() {
        return Err(AppError::InvalidInput("Email already registered".to_string()).into());
    }

    let password_hash = hash_password(password).await?;
    let student = state
        .students
        .create(NewStudent {
            username,
            password_hash,
            name,
            phone,
            email,
        })
        .await?;
    tracing::info!(student_id = %student.id, "Student account created");

    let otp = generate_otp();
    let expires_at = Utc::now() + Duration::minutes(OTP_EXPIRY_MINUTES);
    state.otps.create(&student.email, &otp, expires_at).await?;

    if let Err(error) = deliver_otp(&state, &student.email, &otp).await {
        tracing::error!(error = %error, email = %student.email, "Account created but OTP email failed");
        return Err(AppError::EmailDelivery(
            "Account created but failed to send OTP email. Please try resending OTP.".to_string(),
        )
        .into());
    }

    Ok(Json(SignupResponse {
        success: true,
        message: "Account created successfully. Please check your email for OTP verification."
            .to_string(),
        student_id: student.id,
        email: student.email,
    }))
}

/// Verify a student's email with the OTP they received.
#[utoipa::path(
    post,
    path = "/auth/student/verify-otp",
    tag = "auth",
    request_body = VerifyOtpRequest,
    responses(
        (status = 200, description = "Email verified", body = MessageResponse),
        (status = 400, description = "Invalid or expired OTP", body = ErrorResponse)
    )
)]
pub async fn verify_otp(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<VerifyOtpRequest>,
) -> Result<Json<MessageResponse>, HttpAppError> {
    let (Some(email), Some(otp)) = (non_empty(request.email), non_empty(request.otp)) else {
        return Err(AppError::InvalidInput("Email and OTP are required".to_string()).into());
    };
    tracing::info!(email = %email, "OTP verification attempt");

    let Some(record) = state.otps.find_latest_unused(&email, &otp).await? else {
        return Err(AppError::InvalidInput("Invalid OTP".to_string()).into());
    };

    if Utc::now() > record.expires_at {
        return Err(AppError::InvalidInput(
            "OTP has expired. Please request a new one.".to_string(),
        )
        .into());
    }

    state.otps.mark_used(record.id).await?;
    state.students.mark_verified(&email).await?;
    tracing::info!(email = %email, "Email verified");

    Ok(Json(MessageResponse {
        success: true,
        message: "Email verified successfully. You can now login.".to_string(),
    }))
}

/// Issue a fresh OTP to an already registered email.
#[utoipa::path(
    post,
    path = "/auth/student/resend-otp",
    tag = "auth",
    request_body = ResendOtpRequest,
    responses(
        (status = 200, description = "OTP sent", body = MessageResponse),
        (status = 400, description = "Unknown email", body = ErrorResponse),
        (status = 500, description = "OTP email failed", body = ErrorResponse)
    )
)]
pub async fn resend_otp(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<ResendOtpRequest>,
) -> Result<Json<MessageResponse>, HttpAppError> {
    let Some(email) = non_empty(request.email) else {
        return Err(AppError::InvalidInput("Email is required".to_string()).into());
    };
    tracing::info!(email = %email, "Resend OTP request");

    if state.students.find_by_email(&email).await?.is_none() {
        return Err(AppError::InvalidInput("Email not registered".to_string()).into());
    }

    let otp = generate_otp();
    let expires_at = Utc::now() + Duration::minutes(OTP_EXPIRY_MINUTES);
    state.otps.create(&email, &otp, expires_at).await?;

    if let Err(error) = deliver_otp(&state, &email, &otp).await {
        tracing::error!(error = %error, email = %email, "Resend OTP email failed");
        return Err(AppError::EmailDelivery("Failed to send OTP email".to_string()).into());
    }

    Ok(Json(MessageResponse {
        success: true,
        message: "OTP sent successfully to your email".to_string(),
    }))
}

/// Log a verified student in.
#[utoipa::path(
    post,
    path = "/auth/student/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Bad credentials or unverified email", body = ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<LoginResponse>, HttpAppError> {
    let (Some(username), Some(password)) =
        (non_empty(request.username), non_empty(request.password))
    else {
        return Err(
            AppError::InvalidInput("Username and password are required".to_string()).into(),
        );
    };
    tracing::info!(username = %username, "Login attempt");

    let Some(student) = state.students.find_by_username(&username).await? else {
        return Err(AppError::InvalidInput("Invalid username or password".to_string()).into());
    };

    if !student.is_verified {
        return Err(AppError::InvalidInput("Please verify your email first".to_string()).into());
    }

    if !verify_password(password, student.password_hash.clone()).await? {
        return Err(AppError::InvalidInput("Invalid username or password".to_string()).into());
    }

    tracing::info!(student_id = %student.id, "Login successful");
    Ok(Json(LoginResponse {
        success: true,
        message: "Login successful".to_string(),
        student: student.into(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_otp_is_six_digits() {
        for _ in 0..100 {
            let otp = generate_otp();
            assert_eq!(otp.len(), 6);
            let value: u32 = otp.parse().unwrap();
            assert!((100_000..1_000_000).contains(&value));
        }
    }
}
