//! Posts API - A minimal in-memory REST service
//!
//! CRUD over an ordered list of posts, documented with OpenAPI.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::AppState;
pub use config::Config;
