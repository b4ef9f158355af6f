//! Data models for the application
//!
//! This module contains all data structures used throughout the application,
//! organized by domain. Each sub-module represents a specific feature area.

mod live_class;
mod media_kind;
mod resource;
mod student;

// Re-export all models for convenient imports
pub use live_class::*;
pub use media_kind::*;
pub use resource::*;
pub use student::*;
