//! Configuration module
//!
//! This module provides the application configuration, loaded from
//! environment variables with sensible development defaults.

use std::env;
use std::path::{Path, PathBuf};

// Common constants
const DEFAULT_SERVER_PORT: u16 = 5001;
const MAX_CONNECTIONS: u32 = 5;
const DEFAULT_MAX_UPLOAD_SIZE_BYTES: usize = 500 * 1024 * 1024;
const DEFAULT_FFMPEG_TIMEOUT_SECS: u64 = 0;

/// Full application configuration
#[derive(Clone, Debug)]
pub struct LecternConfig {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub environment: String,
    pub database_url: String,
    pub db_max_connections: u32,
    /// Directory where raw uploads are staged before compression.
    pub upload_dir: PathBuf,
    pub max_upload_size_bytes: usize,
    pub ffmpeg_path: String,
    /// Transcode timeout in seconds. 0 = disabled.
    pub ffmpeg_timeout_secs: u64,
    // Email / OTP delivery
    pub smtp_host: Option<String>,
    pub smtp_port: Option<u16>,
    pub smtp_user: Option<String>,
    pub smtp_password: Option<String>,
    pub smtp_from: Option<String>,
}

/// Application configuration handle shared across services.
#[derive(Clone, Debug)]
pub struct Config(pub Box<LecternConfig>);

impl Config {
    fn inner(&self) -> &LecternConfig {
        &self.0
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        self.inner().environment.to_lowercase().eq("production")
            || self.inner().environment.to_lowercase().eq("prod")
    }

    pub fn from_env() -> Result<Self, anyhow::Error> {
        let config = LecternConfig::from_env()?;
        Ok(Config(Box::new(config)))
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        self.inner().validate()
    }

    // Convenience getters for common fields
    pub fn server_port(&self) -> u16 {
        self.inner().server_port
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.inner().cors_origins
    }

    pub fn environment(&self) -> &str {
        &self.inner().environment
    }

    pub fn database_url(&self) -> &str {
        &self.inner().database_url
    }

    pub fn db_max_connections(&self) -> u32 {
        self.inner().db_max_connections
    }

    pub fn upload_dir(&self) -> &Path {
        &self.inner().upload_dir
    }

    /// Directory where compressed outputs are written and served from.
    pub fn compressed_dir(&self) -> PathBuf {
        self.inner().upload_dir.join("compressed")
    }

    pub fn max_upload_size_bytes(&self) -> usize {
        self.inner().max_upload_size_bytes
    }

    pub fn ffmpeg_path(&self) -> &str {
        &self.inner().ffmpeg_path
    }

    pub fn ffmpeg_timeout_secs(&self) -> u64 {
        self.inner().ffmpeg_timeout_secs
    }

    pub fn smtp_host(&self) -> Option<&str> {
        self.inner().smtp_host.as_deref()
    }

    pub fn smtp_port(&self) -> Option<u16> {
        self.inner().smtp_port
    }

    pub fn smtp_user(&self) -> Option<&str> {
        self.inner().smtp_user.as_deref()
    }

    pub fn smtp_password(&self) -> Option<&str> {
        self.inner().smtp_password.as_deref()
    }

    pub fn smtp_from(&self) -> Option<&str> {
        self.inner().smtp_from.as_deref()
    }
}

impl LecternConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let cors_origins_str = env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string());
        let is_production =
            environment.to_lowercase() == "production" || environment.to_lowercase() == "prod";
        if is_production && cors_origins_str.trim() == "*" {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }

        let cors_origins: Vec<String> = cors_origins_str
            .split(',')
            .map(|s| s.trim().to_string())
            .collect();

        let config = LecternConfig {
            server_port: env::var("SERVER_PORT")
                .or_else(|_| env::var("PORT"))
                .unwrap_or_else(|_| DEFAULT_SERVER_PORT.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("SERVER_PORT must be a valid number"))?,
            cors_origins,
            environment,
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://data/lectern.db".to_string()),
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| MAX_CONNECTIONS.to_string())
                .parse()
                .unwrap_or(MAX_CONNECTIONS),
            upload_dir: PathBuf::from(
                env::var("UPLOAD_DIR").unwrap_or_else(|_| "./uploads".to_string()),
            ),
            max_upload_size_bytes: env::var("MAX_UPLOAD_SIZE_BYTES")
                .unwrap_or_else(|_| DEFAULT_MAX_UPLOAD_SIZE_BYTES.to_string())
                .parse()
                .unwrap_or(DEFAULT_MAX_UPLOAD_SIZE_BYTES),
            ffmpeg_path: env::var("FFMPEG_PATH").unwrap_or_else(|_| "ffmpeg".to_string()),
            ffmpeg_timeout_secs: env::var("FFMPEG_TIMEOUT_SECS")
                .unwrap_or_else(|_| DEFAULT_FFMPEG_TIMEOUT_SECS.to_string())
                .parse()
                .unwrap_or(DEFAULT_FFMPEG_TIMEOUT_SECS),
            smtp_host: env::var("SMTP_HOST").ok(),
            smtp_port: env::var("SMTP_PORT").ok().and_then(|s| s.parse().ok()),
            smtp_user: env::var("SMTP_USER").ok(),
            smtp_password: env::var("SMTP_PASSWORD").ok(),
            smtp_from: env::var("SMTP_FROM").ok(),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if !self.database_url.starts_with("sqlite:") {
            return Err(anyhow::anyhow!(
                "DATABASE_URL must be a valid SQLite connection string"
            ));
        }

        if self.max_upload_size_bytes == 0 {
            return Err(anyhow::anyhow!(
                "MAX_UPLOAD_SIZE_BYTES must be greater than zero"
            ));
        }

        if self.ffmpeg_path.trim().is_empty() {
            return Err(anyhow::anyhow!("FFMPEG_PATH cannot be empty"));
        }

        if self.smtp_host.is_some() && self.smtp_from.is_none() && self.smtp_user.is_none() {
            return Err(anyhow::anyhow!(
                "SMTP_HOST requires SMTP_USER or SMTP_FROM to be set"
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(environment: &str) -> Config {
        Config(Box::new(LecternConfig {
            server_port: DEFAULT_SERVER_PORT,
            cors_origins: vec!["*".to_string()],
            environment: environment.to_string(),
            database_url: "sqlite://data/lectern.db".to_string(),
            db_max_connections: MAX_CONNECTIONS,
            upload_dir: PathBuf::from("./uploads"),
            max_upload_size_bytes: DEFAULT_MAX_UPLOAD_SIZE_BYTES,
            ffmpeg_path: "ffmpeg".to_string(),
            ffmpeg_timeout_secs: DEFAULT_FFMPEG_TIMEOUT_SECS,
            smtp_host: None,
            smtp_port: None,
            smtp_user: None,
            smtp_password: None,
            smtp_from: None,
        }))
    }

    #[test]
    fn test_is_production_matches_prod_aliases() {
        assert!(test_config("production").is_production());
        assert!(test_config("PROD").is_production());
        assert!(!test_config("development").is_production());
    }

    #[test]
    fn test_compressed_dir_nested_under_upload_dir() {
        let config = test_config("development");
        assert_eq!(config.compressed_dir(), PathBuf::from("./uploads/compressed"));
    }

    #[test]
    fn test_validate_rejects_non_sqlite_url() {
        let mut inner = (*test_config("development").0).clone();
        inner.database_url = "postgresql://localhost/lectern".to_string();
        assert!(inner.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_upload_limit() {
        let mut inner = (*test_config("development").0).clone();
        inner.max_upload_size_bytes = 0;
        assert!(inner.validate().is_err());
    }
}
