//! HTTP request handlers.

pub mod auth;
pub mod health;
pub mod index;
pub mod live;
pub mod resources;
pub mod upload;
