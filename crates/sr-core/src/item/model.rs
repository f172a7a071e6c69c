//! Sales item data model

use crate::comment::{Comment, CommentValidator};
use crate::error::{ReviewError, Result};
use crate::types::ItemId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// A product listing with its customer comments
///
/// Comments are kept in insertion order and addressed by 0-based position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesItem {
    /// Stable identifier derived from the name
    pub id: ItemId,
    name: String,
    /// Price in cents
    price: i64,
    #[serde(default)]
    comments: Vec<Comment>,
    /// When the listing was created
    pub created_at: DateTime<Utc>,
}

impl SalesItem {
    /// Create a new listing with no comments
    pub fn new(name: impl Into<String>, price: i64) -> Self {
        let name = name.into();
        Self {
            id: ItemId::from_name(&name),
            name,
            price,
            comments: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Listing name as given at construction
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Price in cents
    pub fn price(&self) -> i64 {
        self.price
    }

    /// Price as currency text, e.g. `$10.00` for 1000
    pub fn formatted_price(&self) -> String {
        let sign = if self.price < 0 { "-" } else { "" };
        let cents = self.price.unsigned_abs();
        format!("{}${}.{:02}", sign, cents / 100, cents % 100)
    }

    /// Get total comment count
    pub fn number_of_comments(&self) -> usize {
        self.comments.len()
    }

    /// All comments in insertion order
    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Get a comment by position
    pub fn comment(&self, index: usize) -> Option<&Comment> {
        self.comments.get(index)
    }

    /// Append a comment without validating its rating.
    ///
    /// The new comment sits at `number_of_comments() - 1`.
    pub fn add_comment(
        &mut self,
        author: impl Into<String>,
        text: impl Into<String>,
        rating: i32,
    ) -> &Comment {
        self.push(Comment::new(author, text, rating))
    }

    /// Append a comment after validating it, allowing one comment per author
    pub fn add_validated_comment(
        &mut self,
        author: impl Into<String>,
        text: impl Into<String>,
        rating: i32,
        validator: &CommentValidator,
    ) -> Result<&Comment> {
        let comment = Comment::validated(author, text, rating, validator)?;

        if self.find_comment_by_author(comment.author()).is_some() {
            warn!(item = %self.id, author = comment.author(), "duplicate author");
            return Err(ReviewError::DuplicateAuthor(comment.author().to_string()));
        }

        Ok(self.push(comment))
    }

    fn push(&mut self, comment: Comment) -> &Comment {
        debug!(
            item = %self.id,
            index = self.comments.len(),
            author = comment.author(),
            rating = comment.rating(),
            "added comment"
        );
        let index = self.comments.len();
        self.comments.push(comment);
        &self.comments[index]
    }

    /// Remove and return the comment at `index`; later comments shift down
    pub fn remove_comment(&mut self, index: usize) -> Result<Comment> {
        self.check_index(index)?;
        let comment = self.comments.remove(index);
        debug!(item = %self.id, index, author = comment.author(), "removed comment");
        Ok(comment)
    }

    /// Upvote the comment at `index`
    pub fn upvote_comment(&mut self, index: usize) -> Result<()> {
        self.comment_mut(index)?.upvote();
        Ok(())
    }

    /// Downvote the comment at `index`
    pub fn downvote_comment(&mut self, index: usize) -> Result<()> {
        self.comment_mut(index)?.downvote();
        Ok(())
    }

    fn comment_mut(&mut self, index: usize) -> Result<&mut Comment> {
        self.check_index(index)?;
        Ok(&mut self.comments[index])
    }

    fn check_index(&self, index: usize) -> Result<()> {
        let len = self.comments.len();
        if index >= len {
            warn!(item = %self.id, index, len, "comment index out of range");
            return Err(ReviewError::CommentIndexOutOfRange { index, len });
        }
        Ok(())
    }

    /// Find the comment with the highest net vote count.
    ///
    /// Returns `None` when there are no comments. Among equal top scores the
    /// earliest added comment wins.
    pub fn find_most_helpful_comment(&self) -> Option<&Comment> {
        self.most_helpful_index().map(|index| &self.comments[index])
    }

    /// Position of the comment `find_most_helpful_comment` returns
    pub fn most_helpful_index(&self) -> Option<usize> {
        let mut comments = self.comments.iter().enumerate();
        let (mut best_index, mut best) = comments.next()?;
        for (index, comment) in comments {
            if comment.vote_count() > best.vote_count() {
                best_index = index;
                best = comment;
            }
        }
        Some(best_index)
    }

    /// First comment written by `author`
    pub fn find_comment_by_author(&self, author: &str) -> Option<&Comment> {
        self.comments.iter().find(|c| c.author() == author)
    }

    /// Mean rating over all comments, as stored
    pub fn average_rating(&self) -> Option<f64> {
        if self.comments.is_empty() {
            return None;
        }
        let total: i64 = self.comments.iter().map(|c| i64::from(c.rating())).sum();
        Some(total as f64 / self.comments.len() as f64)
    }
}

impl fmt::Display for SalesItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "*** {} ***", self.name)?;
        writeln!(f, "Price: {}", self.formatted_price())?;
        if self.comments.is_empty() {
            return writeln!(f, "No customer comments.");
        }
        writeln!(f, "Customer comments:")?;
        for comment in &self.comments {
            writeln!(f, "  {}", comment)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn test_item() -> SalesItem {
        SalesItem::new("Test Item", 1000)
    }

    fn reviewed_item() -> SalesItem {
        let mut item = test_item();
        item.add_comment("Alice", "Great product!", 5);
        item.add_comment("Bob", "It's okay.", 3);
        item.add_comment("Charlie", "Worst purchase ever.", 1);
        item
    }

    #[test]
    fn test_new_item() {
        let item = test_item();
        assert_eq!(item.name(), "Test Item");
        assert_eq!(item.price(), 1000);
        assert_eq!(item.id, ItemId::from_name("Test Item"));
    }

    #[test]
    fn test_formatted_price() {
        assert_eq!(test_item().formatted_price(), "$10.00");
        assert_eq!(SalesItem::new("Pen", 5).formatted_price(), "$0.05");
        assert_eq!(SalesItem::new("Lamp", 12345).formatted_price(), "$123.45");
        assert_eq!(SalesItem::new("Refund", -250).formatted_price(), "-$2.50");
    }

    #[test]
    fn test_find_most_helpful_comment_with_no_comments() {
        let item = test_item();
        assert_eq!(item.number_of_comments(), 0);
        assert!(item.find_most_helpful_comment().is_none());
    }

    #[test]
    fn test_find_most_helpful_comment_with_comments() {
        let mut item = reviewed_item();
        item.upvote_comment(0).unwrap();

        let most_helpful = item.find_most_helpful_comment().unwrap();
        assert_eq!(most_helpful.author(), "Alice");
    }

    #[test]
    fn test_add_comment_preserves_order() {
        let mut item = test_item();
        for (i, author) in ["Alice", "Bob", "Charlie", "David"].iter().enumerate() {
            let added = item.add_comment(*author, "text", 3);
            assert_eq!(added.author(), *author);
            assert_eq!(item.number_of_comments(), i + 1);
            assert_eq!(item.comment(i).unwrap().author(), *author);
        }
    }

    #[test]
    fn test_add_comment_keeps_out_of_range_rating() {
        let mut item = test_item();
        item.add_comment("David", "Terrible product.", 0);
        item.add_comment("Eve", "Not worth it.", 6);
        assert_eq!(item.comment(0).unwrap().rating(), 0);
        assert_eq!(item.comment(1).unwrap().rating(), 6);
    }

    #[test]
    fn test_most_helpful_ignores_insertion_order() {
        let mut item = reviewed_item();
        item.downvote_comment(0).unwrap();
        item.upvote_comment(2).unwrap();
        item.upvote_comment(2).unwrap();
        item.upvote_comment(1).unwrap();

        assert_eq!(item.find_most_helpful_comment().unwrap().author(), "Charlie");
    }

    #[test]
    fn test_most_helpful_with_all_negative_votes() {
        let mut item = reviewed_item();
        item.downvote_comment(0).unwrap();
        item.downvote_comment(0).unwrap();
        item.downvote_comment(1).unwrap();
        item.downvote_comment(2).unwrap();
        item.downvote_comment(2).unwrap();
        item.downvote_comment(2).unwrap();

        assert_eq!(item.find_most_helpful_comment().unwrap().author(), "Bob");
    }

    #[test]
    fn test_most_helpful_tie_prefers_first() {
        let mut item = reviewed_item();
        assert_eq!(item.find_most_helpful_comment().unwrap().author(), "Alice");

        item.upvote_comment(1).unwrap();
        item.upvote_comment(2).unwrap();
        assert_eq!(item.find_most_helpful_comment().unwrap().author(), "Bob");
    }

    #[test]
    fn test_most_helpful_index_with_duplicate_ids() {
        let mut item = reviewed_item();
        item.upvote_comment(2).unwrap();

        let json = serde_json::to_string(&item).unwrap();
        let mut loaded: SalesItem = serde_json::from_str(&json).unwrap();
        let first_id = loaded.comment(0).unwrap().id.clone();
        loaded.comments[2].id = first_id;

        assert_eq!(loaded.most_helpful_index(), Some(2));
        assert_eq!(loaded.find_most_helpful_comment().unwrap().author(), "Charlie");
        assert_eq!(test_item().most_helpful_index(), None);
    }

    #[test]
    fn test_vote_out_of_range() {
        let mut item = reviewed_item();

        let err = item.upvote_comment(3).unwrap_err();
        assert!(matches!(
            err,
            ReviewError::CommentIndexOutOfRange { index: 3, len: 3 }
        ));
        assert!(item.downvote_comment(42).is_err());
        assert!(item.comments().iter().all(|c| c.vote_count() == 0));

        let mut empty = test_item();
        assert!(matches!(
            empty.upvote_comment(0),
            Err(ReviewError::CommentIndexOutOfRange { index: 0, len: 0 })
        ));
    }

    #[test]
    fn test_votes_by_index() {
        let mut item = reviewed_item();
        item.upvote_comment(1).unwrap();
        item.upvote_comment(1).unwrap();
        item.downvote_comment(1).unwrap();
        item.downvote_comment(2).unwrap();

        assert_eq!(item.comment(0).unwrap().vote_count(), 0);
        assert_eq!(item.comment(1).unwrap().vote_count(), 1);
        assert_eq!(item.comment(2).unwrap().vote_count(), -1);
    }

    #[test]
    fn test_remove_comment() {
        let mut item = reviewed_item();
        let removed = item.remove_comment(1).unwrap();
        assert_eq!(removed.author(), "Bob");
        assert_eq!(item.number_of_comments(), 2);
        assert_eq!(item.comment(1).unwrap().author(), "Charlie");
        assert!(item.remove_comment(2).is_err());
    }

    #[test]
    fn test_find_comment_by_author() {
        let item = reviewed_item();
        assert_eq!(item.find_comment_by_author("Bob").unwrap().rating(), 3);
        assert!(item.find_comment_by_author("Mallory").is_none());
    }

    #[test]
    fn test_add_validated_comment() {
        let validator = CommentValidator::new();
        let mut item = test_item();

        item.add_validated_comment("Alice", "Great product!", 5, &validator)
            .unwrap();
        assert!(matches!(
            item.add_validated_comment("Alice", "Changed my mind.", 2, &validator),
            Err(ReviewError::DuplicateAuthor(_))
        ));
        assert!(matches!(
            item.add_validated_comment("Eve", "Not worth it.", 6, &validator),
            Err(ReviewError::InvalidRating { rating: 6, .. })
        ));
        assert_eq!(item.number_of_comments(), 1);
    }

    #[test]
    fn test_average_rating() {
        assert_eq!(test_item().average_rating(), None);
        assert_eq!(reviewed_item().average_rating(), Some(3.0));
    }

    #[test]
    fn test_display() {
        let mut item = test_item();
        assert_eq!(
            item.to_string(),
            "*** Test Item ***\nPrice: $10.00\nNo customer comments.\n"
        );

        item.add_comment("Bob", "It's okay.", 3);
        assert_eq!(
            item.to_string(),
            "*** Test Item ***\nPrice: $10.00\nCustomer comments:\n  Bob (3/5, +0 votes): It's okay.\n"
        );
    }

    #[test]
    fn test_item_serialization() {
        let mut item = reviewed_item();
        item.upvote_comment(2).unwrap();

        let json = serde_json::to_string(&item).unwrap();
        let item2: SalesItem = serde_json::from_str(&json).unwrap();

        assert_eq!(item2.number_of_comments(), 3);
        assert_eq!(item2.comments(), item.comments());
        assert_eq!(item2.find_most_helpful_comment().unwrap().author(), "Charlie");
    }
}
