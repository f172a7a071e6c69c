//! Sales item module
//!
//! A product listing and the ordered comments it owns.

pub mod model;

pub use model::SalesItem;
