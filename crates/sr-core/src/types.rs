//! Core type definitions for sales-reviews

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Lowest rating in the intended scale
pub const RATING_MIN: i32 = 1;

/// Highest rating in the intended scale
pub const RATING_MAX: i32 = 5;

/// Unique identifier for a comment
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommentId(pub Uuid);

impl CommentId {
    /// Generate a new CommentId
    pub fn new() -> Self {
        CommentId(Uuid::new_v4())
    }

    /// Create from UUID string
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(CommentId(Uuid::parse_str(s)?))
    }
}

impl Default for CommentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for a sales item
/// Derived from the item name so the same listing always gets the same id
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub String);

impl ItemId {
    /// Create an ItemId from an item name
    pub fn from_name(name: &str) -> Self {
        let hash = blake3::hash(name.as_bytes());
        ItemId(format!("i_{}", &hash.to_hex()[..12]))
    }

    /// Get the string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
