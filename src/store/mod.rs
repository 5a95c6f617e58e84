//! Store Module
//!
//! Provides the in-memory, insertion-ordered post storage.

mod post;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use post::{IdStrategy, Post};
pub use store::PostStore;
