//! Database repositories for data access layer
//!
//! Each repository is responsible for a specific domain entity and provides
//! the queries the API layer needs.

pub mod live_classes;
pub mod otps;
pub mod resources;
pub mod students;

pub use live_classes::LiveClassRepository;
pub use otps::OtpRepository;
pub use resources::ResourceRepository;
pub use students::StudentRepository;

#[cfg(test)]
pub(crate) mod test_util {
    use sqlx::sqlite::SqlitePoolOptions;
    use sqlx::SqlitePool;
    use std::path::Path;

    /// Fresh in-memory database with all migrations applied. One connection
    /// only, so the in-memory database is shared across queries.
    pub async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        let migrations_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../migrations");
        sqlx::migrate::Migrator::new(migrations_dir)
            .await
            .unwrap()
            .run(&pool)
            .await
            .unwrap();

        pool
    }
}
