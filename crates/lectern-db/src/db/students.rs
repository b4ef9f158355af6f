use chrono::Utc;
use lectern_core::models::{NewStudent, Student};
use lectern_core::AppError;
use sqlx::{Sqlite, SqlitePool};
use uuid::Uuid;

/// Repository for student accounts
#[derive(Clone)]
pub struct StudentRepository {
    pool: SqlitePool,
}

impl StudentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Register a new, unverified student
    #[tracing::instrument(skip(self, student), fields(db.table = "students", db.operation = "insert"))]
    pub async fn create(&self, student: NewStudent) -> Result<Student, AppError> {
        let created = sqlx::query_as::<Sqlite, Student>(
            r#"
            INSERT INTO students (id, username, password_hash, name, phone, email, is_verified, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, 0, $7)
            RETURNING id, username, password_hash, name, phone, email, is_verified, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&student.username)
        .bind(&student.password_hash)
        .bind(&student.name)
        .bind(&student.phone)
        .bind(&student.email)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    #[tracing::instrument(skip(self), fields(db.table = "students", db.operation = "select"))]
    pub async fn find_by_username(&self, username: &str) -> Result<Option<Student>, AppError> {
        let student = sqlx::query_as::<Sqlite, Student>(
            "SELECT id, username, password_hash, name, phone, email, is_verified, created_at FROM students WHERE username = $1"
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(student)
    }

    #[tracing::instrument(skip(self), fields(db.table = "students", db.operation = "select"))]
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Student>, AppError> {
        let student = sqlx::query_as::<Sqlite, Student>(
            "SELECT id, username, password_hash, name, phone, email, is_verified, created_at FROM students WHERE email = $1"
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(student)
    }

    /// Flip the verification flag after a successful OTP check
    #[tracing::instrument(skip(self), fields(db.table = "students", db.operation = "update"))]
    pub async fn mark_verified(&self, email: &str) -> Result<(), AppError> {
        sqlx::query("UPDATE students SET is_verified = 1 WHERE email = $1")
            .bind(email)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_util::test_pool;

    fn asha() -> NewStudent {
        NewStudent {
            username: "asha".to_string(),
            password_hash: "$2b$10$hash".to_string(),
            name: "Asha".to_string(),
            phone: "9876543210".to_string(),
            email: "asha@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn test_created_students_start_unverified() {
        let pool = test_pool().await;
        let repo = StudentRepository::new(pool);

        let created = repo.create(asha()).await.unwrap();
        assert!(!created.is_verified);
        assert_eq!(created.username, "asha");

        let found = repo.find_by_username("asha").await.unwrap().unwrap();
        assert_eq!(found.id, created.id);
        assert!(repo.find_by_username("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_mark_verified_flips_flag() {
        let pool = test_pool().await;
        let repo = StudentRepository::new(pool);

        repo.create(asha()).await.unwrap();
        repo.mark_verified("asha@example.com").await.unwrap();

        let found = repo
            .find_by_email("asha@example.com")
            .await
            .unwrap()
            .unwrap();
        assert!(found.is_verified);
    }

    #[tokio::test]
    async fn test_duplicate_username_is_a_database_error() {
        let pool = test_pool().await;
        let repo = StudentRepository::new(pool);

        repo.create(asha()).await.unwrap();
        let mut dup = asha();
        dup.email = "other@example.com".to_string();
        assert!(repo.create(dup).await.is_err());
    }
}
