//! Comment data model

use super::validator::CommentValidator;
use crate::error::Result;
use crate::types::{CommentId, RATING_MAX, RATING_MIN};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

/// A customer review of a sales item
///
/// Author, text and rating are fixed at construction. The net vote count is
/// the only mutable state and is a single running total of upvotes minus
/// downvotes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Unique comment identifier
    pub id: CommentId,
    author: String,
    text: String,
    /// Intended range is 1..=5 but any value is stored verbatim
    rating: i32,
    #[serde(default)]
    vote_count: i64,
    /// When the comment was created
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a comment without checking the rating.
    ///
    /// Never fails: a rating of 0 or 6 is kept as given.
    pub fn new(author: impl Into<String>, text: impl Into<String>, rating: i32) -> Self {
        Self {
            id: CommentId::new(),
            author: author.into(),
            text: text.into(),
            rating,
            vote_count: 0,
            created_at: Utc::now(),
        }
    }

    /// Create a comment, rejecting input the validator does not accept
    pub fn validated(
        author: impl Into<String>,
        text: impl Into<String>,
        rating: i32,
        validator: &CommentValidator,
    ) -> Result<Self> {
        let comment = Self::new(author, text, rating);
        validator.validate(&comment)?;
        Ok(comment)
    }

    /// Author as given at construction
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Review body
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Rating exactly as constructed, even outside 1..=5
    pub fn rating(&self) -> i32 {
        self.rating
    }

    /// Net votes: upvotes minus downvotes
    pub fn vote_count(&self) -> i64 {
        self.vote_count
    }

    /// Record one upvote
    pub fn upvote(&mut self) {
        self.vote_count = self.vote_count.saturating_add(1);
        trace!(comment = %self.id, votes = self.vote_count, "upvoted");
    }

    /// Record one downvote; the count may go negative
    pub fn downvote(&mut self) {
        self.vote_count = self.vote_count.saturating_sub(1);
        trace!(comment = %self.id, votes = self.vote_count, "downvoted");
    }

    /// Check whether the rating lies in the intended 1..=5 scale
    pub fn has_valid_rating(&self) -> bool {
        (RATING_MIN..=RATING_MAX).contains(&self.rating)
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}/{}, {:+} votes): {}",
            self.author, self.rating, RATING_MAX, self.vote_count, self.text
        )
    }
}
