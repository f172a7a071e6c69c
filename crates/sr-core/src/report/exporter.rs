//! Exporter trait and manager

use super::json::JsonExporter;
use super::markdown::MarkdownExporter;
use crate::config::ReportConfig;
use crate::error::{ReviewError, Result};
use crate::item::SalesItem;
use std::collections::HashMap;
use tracing::debug;

/// Trait for sales item exporters
pub trait Exporter: Send + Sync {
    /// Render an item to string
    fn export(&self, item: &SalesItem) -> Result<String>;

    /// Get the format name
    fn format_name(&self) -> &str;

    /// Get the file extension
    fn file_extension(&self) -> &str;
}

/// Registry of export formats keyed by name
pub struct ExportManager {
    exporters: HashMap<String, Box<dyn Exporter>>,
    /// Format used by `export_default`
    default_format: String,
}

impl ExportManager {
    /// Create a new export manager with default exporters
    pub fn new() -> Self {
        Self::from_config(&ReportConfig::default())
    }

    /// Create a manager whose default exporters follow the report settings
    pub fn from_config(config: &ReportConfig) -> Self {
        let mut manager = Self {
            exporters: HashMap::new(),
            default_format: config.default_format.clone(),
        };

        manager.register(Box::new(JsonExporter::new(false).with_pretty(config.pretty)));
        manager.register(Box::new(JsonExporter::compact()));
        manager.register(Box::new(
            MarkdownExporter::new().with_stats(config.include_stats),
        ));

        manager
    }

    /// Register a new exporter, replacing any with the same name
    pub fn register(&mut self, exporter: Box<dyn Exporter>) {
        self.exporters
            .insert(exporter.format_name().to_string(), exporter);
    }

    /// Render an item in the named format
    pub fn export(&self, item: &SalesItem, format: &str) -> Result<String> {
        let exporter = self.get(format).ok_or_else(|| {
            ReviewError::Validation(format!("Unknown export format: {}", format))
        })?;

        debug!(item = %item.id, format, "exporting");
        exporter.export(item)
    }

    /// Render an item in the configured default format
    pub fn export_default(&self, item: &SalesItem) -> Result<String> {
        self.export(item, &self.default_format)
    }

    /// Name of the configured default format
    pub fn default_format(&self) -> &str {
        &self.default_format
    }

    /// Get list of available format names
    pub fn available_formats(&self) -> Vec<String> {
        let mut formats: Vec<_> = self.exporters.keys().cloned().collect();
        formats.sort();
        formats
    }

    /// Check if a format is available
    pub fn has_format(&self, format: &str) -> bool {
        self.exporters.contains_key(format)
    }

    /// Get an exporter by format name
    pub fn get(&self, format: &str) -> Option<&dyn Exporter> {
        self.exporters.get(format).map(|e| e.as_ref())
    }
}

impl Default for ExportManager {
    fn default() -> Self {
        Self::new()
    }
}
