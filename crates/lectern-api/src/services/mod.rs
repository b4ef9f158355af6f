//! Application services.

pub mod email;
pub mod metadata;

pub use email::EmailService;
pub use metadata::SqlMetadataStore;
