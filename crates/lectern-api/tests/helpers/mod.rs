//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p lectern-api --test upload_test` or
//! `cargo test -p lectern-api`. Migrations path: from lectern-api crate root,
//! `../../migrations`.

#![allow(dead_code)]

pub mod fixtures;

use axum_test::TestServer;
use lectern_api::setup::{routes, services};
use lectern_core::{Config, LecternConfig};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::path::Path;
use tempfile::TempDir;

/// Test application: server, pool, and owned resources.
pub struct TestApp {
    pub server: TestServer,
    pub pool: SqlitePool,
    pub upload_root: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

fn test_config(upload_dir: &Path) -> Config {
    Config(Box::new(LecternConfig {
        server_port: 5001,
        cors_origins: vec!["*".to_string()],
        environment: "development".to_string(),
        database_url: "sqlite::memory:".to_string(),
        db_max_connections: 1,
        upload_dir: upload_dir.to_path_buf(),
        max_upload_size_bytes: 50 * 1024 * 1024,
        // Deliberately missing so video uploads exercise the copy fallback.
        ffmpeg_path: "/nonexistent-ffmpeg-binary".to_string(),
        ffmpeg_timeout_secs: 0,
        smtp_host: None,
        smtp_port: None,
        smtp_user: None,
        smtp_password: None,
        smtp_from: None,
    }))
}

/// Setup test app with an isolated in-memory database and temp upload dir.
///
/// One pool connection only, so the in-memory database is shared across
/// queries. SMTP is unconfigured; verification codes land in the database
/// and are fetched from there by the auth tests.
pub async fn setup_test_app() -> TestApp {
    let upload_root = TempDir::new().expect("Failed to create temp upload dir");

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to connect to test database");

    let migrations_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../migrations");
    sqlx::migrate::Migrator::new(migrations_dir)
        .await
        .expect("Failed to load migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    let config = test_config(upload_root.path());
    let state = services::initialize_services(&config, pool.clone())
        .await
        .expect("Failed to initialize services");
    let router = routes::setup_routes(&config, state).expect("Failed to build router");
    let server = TestServer::new(router).expect("Failed to start test server");

    TestApp {
        server,
        pool,
        upload_root,
    }
}
