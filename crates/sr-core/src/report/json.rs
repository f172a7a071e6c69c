//! JSON exporter for sales items

use super::exporter::Exporter;
use crate::comment::Comment;
use crate::error::Result;
use crate::item::SalesItem;
use serde::{Deserialize, Serialize};

/// JSON exporter with compact mode support
pub struct JsonExporter {
    /// Whether to use pretty-print formatting
    pretty: bool,
    /// Format name
    name: String,
}

impl JsonExporter {
    /// Create a new JSON exporter
    pub fn new(compact: bool) -> Self {
        Self {
            pretty: !compact,
            name: if compact {
                "json-compact".to_string()
            } else {
                "json".to_string()
            },
        }
    }

    /// Create a compact JSON exporter
    pub fn compact() -> Self {
        Self::new(true)
    }

    /// Create a pretty-printed JSON exporter
    pub fn pretty() -> Self {
        Self::new(false)
    }

    /// Override pretty-printing without changing the format name
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Exporter for JsonExporter {
    fn export(&self, item: &SalesItem) -> Result<String> {
        let data = ExportData::from_item(item);

        let json = if self.pretty {
            serde_json::to_string_pretty(&data)?
        } else {
            serde_json::to_string(&data)?
        };

        Ok(json)
    }

    fn format_name(&self) -> &str {
        &self.name
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}

/// Exported data structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportData {
    /// Item ID
    pub id: String,
    pub name: String,
    pub price: i64,
    /// Unix timestamp of listing creation
    pub ts: i64,
    pub stats: ExportStats,
    /// Comments in insertion order
    pub comments: Vec<ExportComment>,
}

impl ExportData {
    /// Create from a sales item
    pub fn from_item(item: &SalesItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name().to_string(),
            price: item.price(),
            ts: item.created_at.timestamp(),
            stats: ExportStats::from_item(item),
            comments: item.comments().iter().map(ExportComment::from_comment).collect(),
        }
    }
}

/// Export statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportStats {
    /// Comment count
    pub count: usize,
    /// Mean rating, absent when there are no comments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f64>,
    /// Position of the most helpful comment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_helpful: Option<usize>,
}

impl ExportStats {
    /// Create from a sales item
    pub fn from_item(item: &SalesItem) -> Self {
        Self {
            count: item.number_of_comments(),
            average_rating: item.average_rating(),
            most_helpful: item.most_helpful_index(),
        }
    }
}

/// A single exported comment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportComment {
    pub author: String,
    pub text: String,
    pub rating: i32,
    pub votes: i64,
}

impl ExportComment {
    /// Create from a comment
    pub fn from_comment(comment: &Comment) -> Self {
        Self {
            author: comment.author().to_string(),
            text: comment.text().to_string(),
            rating: comment.rating(),
            votes: comment.vote_count(),
        }
    }
}
