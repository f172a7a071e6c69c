//! sr-core - Core library for sales-reviews
//!
//! This crate provides the review model for product listings: rated comments
//! with net vote counts, the listing that owns them, rating configuration,
//! and report rendering.

pub mod error;
pub mod types;
pub mod config;
pub mod comment;
pub mod item;
pub mod report;

pub use comment::{Comment, CommentValidator};
pub use error::{ReviewError, Result};
pub use item::SalesItem;
pub use types::*;
