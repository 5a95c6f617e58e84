//! Post Module
//!
//! Defines the post record and the policy used to number new posts.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// == Post ==
/// A single post record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Post {
    /// Post identifier, assigned at creation
    #[schema(example = 1)]
    pub id: i64,
    /// Post title
    #[schema(example = "post 1")]
    pub title: String,
}

impl Post {
    /// Creates a new Post
    pub fn new(id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}

// == Id Strategy ==
/// How the store picks the id of a newly created post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
    /// `len + 1`. Can hand out an id that is still in use after a delete.
    #[default]
    Length,
    /// Counter that only grows, so ids are never reused.
    Monotonic,
}

impl FromStr for IdStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "length" => Ok(IdStrategy::Length),
            "monotonic" => Ok(IdStrategy::Monotonic),
            other => Err(format!("unknown id strategy: {}", other)),
        }
    }
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdStrategy::Length => f.write_str("length"),
            IdStrategy::Monotonic => f.write_str("monotonic"),
        }
    }
}
