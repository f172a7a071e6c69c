//! Markdown exporter for sales items

use super::exporter::Exporter;
use crate::comment::Comment;
use crate::error::Result;
use crate::item::SalesItem;
use crate::types::RATING_MAX;

/// Markdown exporter
pub struct MarkdownExporter {
    /// Include statistics section
    include_stats: bool,
}

impl MarkdownExporter {
    /// Create a new Markdown exporter with default settings
    pub fn new() -> Self {
        Self {
            include_stats: true,
        }
    }

    /// Set whether to include statistics
    pub fn with_stats(mut self, include: bool) -> Self {
        self.include_stats = include;
        self
    }

    /// Render the report header
    fn render_header(&self, item: &SalesItem) -> String {
        let mut header = String::new();
        header.push_str(&format!("# {}\n\n", item.name()));
        header.push_str(&format!("**Item:** `{}`\n", item.id));
        header.push_str(&format!("**Price:** {}\n", item.formatted_price()));
        header.push_str(&format!(
            "**Listed:** {}\n",
            item.created_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        header.push('\n');
        header
    }

    /// Render the statistics section
    fn render_stats(&self, item: &SalesItem) -> String {
        if !self.include_stats {
            return String::new();
        }

        let mut stats = String::new();
        stats.push_str("## Summary\n\n");
        stats.push_str(&format!(
            "- **Total Comments:** {}\n",
            item.number_of_comments()
        ));
        if let Some(avg) = item.average_rating() {
            stats.push_str(&format!("- **Average Rating:** {:.1}\n", avg));
        }
        if let Some(best) = item.find_most_helpful_comment() {
            stats.push_str(&format!(
                "- **Most Helpful:** {} ({:+} votes)\n",
                best.author(),
                best.vote_count()
            ));
        }
        stats.push('\n');

        stats
    }

    /// Render a single comment
    fn render_comment(&self, index: usize, comment: &Comment) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "### {}. {} ({}/{})\n\n",
            index + 1,
            comment.author(),
            comment.rating(),
            RATING_MAX
        ));
        output.push_str(comment.text());
        output.push_str("\n\n");
        output.push_str(&format!("_Votes: {:+}_\n\n", comment.vote_count()));
        output
    }
}

impl Default for MarkdownExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Exporter for MarkdownExporter {
    fn export(&self, item: &SalesItem) -> Result<String> {
        let mut output = self.render_header(item);
        output.push_str(&self.render_stats(item));

        if item.number_of_comments() == 0 {
            output.push_str("_No customer comments._\n");
            return Ok(output);
        }

        output.push_str("## Comments\n\n");
        for (index, comment) in item.comments().iter().enumerate() {
            output.push_str(&self.render_comment(index, comment));
        }

        Ok(output)
    }

    fn format_name(&self) -> &str {
        "markdown"
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_empty_item() {
        let item = SalesItem::new("Test Item", 1000);
        let md = MarkdownExporter::new().export(&item).unwrap();
        assert!(md.starts_with("# Test Item\n"));
        assert!(md.contains("**Price:** $10.00"));
        assert!(md.contains("- **Total Comments:** 0"));
        assert!(!md.contains("Most Helpful"));
        assert!(md.contains("_No customer comments._"));
    }

    #[test]
    fn test_markdown_with_comments() {
        let mut item = SalesItem::new("Test Item", 1000);
        item.add_comment("Alice", "Great product!", 5);
        item.add_comment("Bob", "It's okay.", 3);
        item.upvote_comment(0).unwrap();

        let md = MarkdownExporter::new().export(&item).unwrap();
        assert!(md.contains("- **Average Rating:** 4.0"));
        assert!(md.contains("- **Most Helpful:** Alice (+1 votes)"));
        assert!(md.contains("### 1. Alice (5/5)\n\nGreat product!\n\n_Votes: +1_"));
        assert!(md.contains("### 2. Bob (3/5)"));
    }

    #[test]
    fn test_markdown_without_stats() {
        let mut item = SalesItem::new("Test Item", 1000);
        item.add_comment("Bob", "It's okay.", 3);

        let md = MarkdownExporter::new().with_stats(false).export(&item).unwrap();
        assert!(!md.contains("## Summary"));
        assert!(md.contains("## Comments"));
    }
}
