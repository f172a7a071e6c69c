//! Configuration management for sales-reviews

use crate::comment::validator::{CommentValidator, MAX_TEXT_LENGTH};
use crate::comment::Comment;
use crate::error::{ReviewError, Result};
use crate::item::SalesItem;
use crate::types::{RATING_MAX, RATING_MIN};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Rating and validation settings
    pub ratings: RatingConfig,
    /// Report settings
    pub report: ReportConfig,
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s)?;
        config.check()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| ReviewError::from(e).with_context(format!("Failed to read {:?}", path)))?;
        let config = Self::from_toml_str(&content)?;
        debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Serialize to pretty TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| ReviewError::Toml(e.to_string()))
    }

    /// Build the validator used on the strict path
    pub fn validator(&self) -> CommentValidator {
        CommentValidator::with_rating_range(self.ratings.min, self.ratings.max)
            .max_text_length(self.ratings.max_text_length)
    }

    /// Add a comment to `item`, validating it first when `ratings.strict` is set
    pub fn add_comment<'a>(
        &self,
        item: &'a mut SalesItem,
        author: impl Into<String>,
        text: impl Into<String>,
        rating: i32,
    ) -> Result<&'a Comment> {
        if self.ratings.strict {
            item.add_validated_comment(author, text, rating, &self.validator())
        } else {
            Ok(item.add_comment(author, text, rating))
        }
    }

    fn check(&self) -> Result<()> {
        if self.ratings.min > self.ratings.max {
            return Err(ReviewError::Config(format!(
                "ratings.min ({}) is greater than ratings.max ({})",
                self.ratings.min, self.ratings.max
            )));
        }
        Ok(())
    }
}

/// Rating-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    /// Lowest accepted rating on the strict path
    pub min: i32,
    /// Highest accepted rating on the strict path
    pub max: i32,
    /// Route new comments through validation
    pub strict: bool,
    /// Maximum comment text length
    pub max_text_length: usize,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            min: RATING_MIN,
            max: RATING_MAX,
            strict: false,
            max_text_length: MAX_TEXT_LENGTH,
        }
    }
}

/// Report-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Format used by `ExportManager::export_default`
    pub default_format: String,
    /// Include the summary section
    pub include_stats: bool,
    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            default_format: "markdown".to_string(),
            include_stats: true,
            pretty: true,
        }
    }
}
