//! Report rendering for sales items
//!
//! Turns a listing and its comments into JSON or Markdown text. Output is
//! returned as a `String`; where it goes is up to the caller.
//!
//! # Example
//!
//! ```ignore
//! use sr_core::report::ExportManager;
//!
//! let manager = ExportManager::new();
//! let json = manager.export(&item, "json")?;
//! let md = manager.export(&item, "markdown")?;
//! ```

mod exporter;
mod json;
mod markdown;

pub use exporter::{ExportManager, Exporter};
pub use json::{ExportComment, ExportData, ExportStats, JsonExporter};
pub use markdown::MarkdownExporter;
