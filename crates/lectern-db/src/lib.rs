//! Lectern Database Library
//!
//! Repositories for the SQLite metadata store. Each repository owns one
//! table and exposes the few queries the API needs; records are written
//! once and never updated in place, except for verification flags.

pub mod db;

pub use db::{LiveClassRepository, OtpRepository, ResourceRepository, StudentRepository};
