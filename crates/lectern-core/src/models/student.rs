use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A registered student account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Student {
    pub id: Uuid,
    pub username: String,
    /// bcrypt hash, never exposed through the API.
    pub password_hash: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

/// Fields for registering a new student.
#[derive(Debug, Clone)]
pub struct NewStudent {
    pub username: String,
    pub password_hash: String,
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// Public view of a student, returned after login.
#[derive(Debug, Serialize, ToSchema)]
pub struct StudentResponse {
    pub id: Uuid,
    pub username: String,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl From<Student> for StudentResponse {
    fn from(student: Student) -> Self {
        StudentResponse {
            id: student.id,
            username: student.username,
            name: student.name,
            email: student.email,
            phone: student.phone,
        }
    }
}

/// A one-time password issued for email verification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct OtpVerification {
    pub id: Uuid,
    pub email: String,
    pub otp: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub is_used: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_response_omits_password_hash() {
        let student = Student {
            id: Uuid::new_v4(),
            username: "asha".to_string(),
            password_hash: "$2b$10$abcdefghijklmnopqrstuv".to_string(),
            name: "Asha".to_string(),
            phone: "9876543210".to_string(),
            email: "asha@example.com".to_string(),
            is_verified: true,
            created_at: Utc::now(),
        };
        let response = StudentResponse::from(student);
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("password"));
        assert!(json.contains("asha@example.com"));
    }
}
