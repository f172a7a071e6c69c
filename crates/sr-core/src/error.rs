//! Error types for sales-reviews

use thiserror::Error;

/// Main error type for sales-reviews
#[derive(Debug, Error)]
pub enum ReviewError {
    /// Vote or removal addressed a position that holds no comment
    #[error("Comment index {index} out of range (item has {len} comments)")]
    CommentIndexOutOfRange { index: usize, len: usize },

    /// Rating outside the accepted range on the strict path
    #[error("Invalid rating {rating}: must be between {min} and {max}")]
    InvalidRating { rating: i32, min: i32, max: i32 },

    /// Author already reviewed this item
    #[error("Author '{0}' has already commented on this item")]
    DuplicateAuthor(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<ReviewError>,
    },
}

impl ReviewError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        ReviewError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

impl From<toml::de::Error> for ReviewError {
    fn from(err: toml::de::Error) -> Self {
        ReviewError::Toml(err.to_string())
    }
}

/// Result type alias for sales-reviews
pub type Result<T> = std::result::Result<T, ReviewError>;
