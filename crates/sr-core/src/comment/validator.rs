//! Comment validation for the strict construction path

use super::model::Comment;
use crate::error::{ReviewError, Result};
use crate::types::{RATING_MAX, RATING_MIN};
use tracing::warn;

/// Maximum comment text length (default)
pub const MAX_TEXT_LENGTH: usize = 10000;

/// Validator for comments
///
/// Only consulted by `Comment::validated` and `SalesItem::add_validated_comment`;
/// the plain constructors accept anything.
#[derive(Debug, Clone)]
pub struct CommentValidator {
    min_rating: i32,
    max_rating: i32,
    max_text_length: usize,
}

impl CommentValidator {
    /// Create a new validator with default settings
    pub fn new() -> Self {
        Self {
            min_rating: RATING_MIN,
            max_rating: RATING_MAX,
            max_text_length: MAX_TEXT_LENGTH,
        }
    }

    /// Create a validator with a custom rating range
    pub fn with_rating_range(min_rating: i32, max_rating: i32) -> Self {
        Self {
            min_rating,
            max_rating,
            ..Self::new()
        }
    }

    /// Set the maximum text length
    pub fn max_text_length(mut self, max_text_length: usize) -> Self {
        self.max_text_length = max_text_length;
        self
    }

    /// Validate a rating against the configured range
    pub fn validate_rating(&self, rating: i32) -> Result<()> {
        if rating < self.min_rating || rating > self.max_rating {
            warn!(rating, "rejected out-of-range rating");
            return Err(ReviewError::InvalidRating {
                rating,
                min: self.min_rating,
                max: self.max_rating,
            });
        }
        Ok(())
    }

    /// Validate the author name
    pub fn validate_author(&self, author: &str) -> Result<()> {
        if author.trim().is_empty() {
            return Err(ReviewError::Validation(
                "Comment author cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Validate comment text
    pub fn validate_text(&self, text: &str) -> Result<()> {
        let trimmed = text.trim();

        if trimmed.is_empty() {
            return Err(ReviewError::Validation(
                "Comment text cannot be empty".to_string(),
            ));
        }

        if trimmed.chars().count() > self.max_text_length {
            return Err(ReviewError::Validation(format!(
                "Comment text exceeds maximum length of {} characters",
                self.max_text_length
            )));
        }

        Ok(())
    }

    /// Validate a complete comment
    pub fn validate(&self, comment: &Comment) -> Result<()> {
        self.validate_author(comment.author())?;
        self.validate_text(comment.text())?;
        self.validate_rating(comment.rating())
    }
}

impl Default for CommentValidator {
    fn default() -> Self {
        Self::new()
    }
}
