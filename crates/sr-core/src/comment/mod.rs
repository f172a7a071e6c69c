//! Comment system module
//!
//! Handles individual reviews, their votes, and optional validation.

pub mod model;
pub mod validator;

pub use model::Comment;
pub use validator::CommentValidator;
