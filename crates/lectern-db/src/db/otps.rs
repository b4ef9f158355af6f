use chrono::{DateTime, Utc};
use lectern_core::models::OtpVerification;
use lectern_core::AppError;
use sqlx::{Sqlite, SqlitePool};
use uuid::Uuid;

/// Repository for email verification OTPs
#[derive(Clone)]
pub struct OtpRepository {
    pool: SqlitePool,
}

impl OtpRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Record a freshly issued OTP
    #[tracing::instrument(skip(self, otp), fields(db.table = "otp_verifications", db.operation = "insert"))]
    pub async fn create(
        &self,
        email: &str,
        otp: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<OtpVerification, AppError> {
        let created = sqlx::query_as::<Sqlite, OtpVerification>(
            r#"
            INSERT INTO otp_verifications (id, email, otp, created_at, expires_at, is_used)
            VALUES ($1, $2, $3, $4, $5, 0)
            RETURNING id, email, otp, created_at, expires_at, is_used
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(email)
        .bind(otp)
        .bind(Utc::now())
        .bind(expires_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    /// Most recent unused OTP matching this email and code, if any
    #[tracing::instrument(skip(self, otp), fields(db.table = "otp_verifications", db.operation = "select"))]
    pub async fn find_latest_unused(
        &self,
        email: &str,
        otp: &str,
    ) -> Result<Option<OtpVerification>, AppError> {
        let record = sqlx::query_as::<Sqlite, OtpVerification>(
            r#"
            SELECT id, email, otp, created_at, expires_at, is_used
            FROM otp_verifications
            WHERE email = $1 AND otp = $2 AND is_used = 0
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(email)
        .bind(otp)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    /// Burn an OTP after successful verification
    #[tracing::instrument(skip(self), fields(db.table = "otp_verifications", db.operation = "update"))]
    pub async fn mark_used(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query("UPDATE otp_verifications SET is_used = 1 WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_util::test_pool;
    use chrono::Duration;

    #[tokio::test]
    async fn test_find_latest_unused_matches_email_and_code() {
        let pool = test_pool().await;
        let repo = OtpRepository::new(pool);
        let expiry = Utc::now() + Duration::minutes(10);

        repo.create("asha@example.com", "123456", expiry)
            .await
            .unwrap();

        assert!(repo
            .find_latest_unused("asha@example.com", "123456")
            .await
            .unwrap()
            .is_some());
        assert!(repo
            .find_latest_unused("asha@example.com", "654321")
            .await
            .unwrap()
            .is_none());
        assert!(repo
            .find_latest_unused("other@example.com", "123456")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_used_otps_are_not_returned() {
        let pool = test_pool().await;
        let repo = OtpRepository::new(pool);
        let expiry = Utc::now() + Duration::minutes(10);

        let created = repo
            .create("asha@example.com", "123456", expiry)
            .await
            .unwrap();
        repo.mark_used(created.id).await.unwrap();

        assert!(repo
            .find_latest_unused("asha@example.com", "123456")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_latest_of_several_codes_wins() {
        let pool = test_pool().await;
        let repo = OtpRepository::new(pool);
        let expiry = Utc::now() + Duration::minutes(10);

        let first = repo
            .create("asha@example.com", "111111", expiry)
            .await
            .unwrap();
        let second = repo
            .create("asha@example.com", "111111", expiry)
            .await
            .unwrap();

        let found = repo
            .find_latest_unused("asha@example.com", "111111")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, second.id);
        assert_ne!(found.id, first.id);
    }
}
