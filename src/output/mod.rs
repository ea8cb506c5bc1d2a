//! Output formatting for CLI display
//!
//! This module provides utilities for formatting output in the CLI,
//! including item lines, tag counts, and the full detail block used by
//! `folio show`.

use crate::Item;
use crate::gallery::PageView;
use colored::Colorize;

/// Format an item as a single list line
#[must_use]
pub fn item_line(item: &Item, quiet: bool) -> String {
    if quiet {
        return item.id.clone();
    }

    let year = format!("({})", item.year).dimmed();
    if item.tags.is_empty() {
        format!("  {} {year}", item.title.bold())
    } else {
        format!(
            "  {} {year} [{}]",
            item.title.bold(),
            item.tags.join(", ").cyan()
        )
    }
}

/// Format a tag with usage count
#[must_use]
pub fn tag_with_count(tag: &str, count: usize, quiet: bool) -> String {
    if quiet {
        tag.to_string()
    } else {
        format!("  {} (used by {count} item(s))", tag.magenta())
    }
}

/// Format the page header shown above list output
#[must_use]
pub fn page_header(view: &PageView, filtered_count: usize) -> String {
    format!(
        "{} item(s), page {}/{}",
        filtered_count, view.page, view.total_pages
    )
    .dimmed()
    .to_string()
}

/// Format the full detail block for one item
#[must_use]
pub fn item_detail(item: &Item, quiet: bool) -> String {
    if quiet {
        return item.id.clone();
    }

    let mut lines = vec![
        format!("{} {}", item.title.bold(), format!("({})", item.year).dimmed()),
        format!("  {} {}", "id:".dimmed(), item.id),
    ];

    if !item.role.is_empty() {
        lines.push(format!("  {} {}", "role:".dimmed(), item.role));
    }
    if !item.summary.is_empty() {
        lines.push(format!("  {} {}", "summary:".dimmed(), item.summary));
    }
    if !item.tools.is_empty() {
        lines.push(format!("  {} {}", "tools:".dimmed(), item.tools.join(", ")));
    }
    if !item.tags.is_empty() {
        lines.push(format!(
            "  {} {}",
            "tags:".dimmed(),
            item.tags.join(", ").cyan()
        ));
    }
    if item.images.is_empty() {
        lines.push(format!("  {} (placeholder)", "images:".dimmed()));
    } else {
        lines.push(format!(
            "  {} {}",
            "images:".dimmed(),
            item.images.join(", ")
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_items;

    #[test]
    fn test_quiet_item_line_is_bare_id() {
        let items = sample_items();
        assert_eq!(item_line(&items[0], true), "atlas");
    }

    #[test]
    fn test_item_line_includes_title_year_tags() {
        let items = sample_items();
        let line = item_line(&items[0], false);
        assert!(line.contains("Atlas CMS"));
        assert!(line.contains("(2025)"));
        assert!(line.contains("web"));
    }

    #[test]
    fn test_tag_with_count_quiet() {
        assert_eq!(tag_with_count("web", 3, true), "web");
        assert!(tag_with_count("web", 3, false).contains("3 item(s)"));
    }

    #[test]
    fn test_detail_block_placeholder_for_imageless() {
        let items = sample_items();
        let quarry = items.iter().find(|i| i.id == "quarry").unwrap();
        let block = item_detail(quarry, false);
        assert!(block.contains("placeholder"));
    }
}
