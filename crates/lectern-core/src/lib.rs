//! Lectern Core Library
//!
//! This crate provides core domain models, error types, and configuration
//! that are shared across all Lectern components.

pub mod config;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::{Config, LecternConfig};
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{
    LiveClass, LiveClassResponse, MediaKind, NewLiveClass, NewResource, NewStudent,
    OtpVerification, Resource, ResourceResponse, Student, StudentResponse,
};
