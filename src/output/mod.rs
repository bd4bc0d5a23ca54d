//! Output formatting for CLI display
//!
//! Line formats shared by `list` and `tags`. Quiet mode prints bare values
//! suitable for piping.

use crate::catalog::ProjectRecord;
use crate::gallery::markup;
use colored::Colorize;

/// Format one project of the visible set
#[must_use]
pub fn project_line(index: usize, record: &ProjectRecord, quiet: bool) -> String {
    if quiet {
        return record.title.clone();
    }

    let year = record.year_label();
    let year = if year.is_empty() {
        String::new()
    } else {
        format!(" ({year})")
    };
    let tags = if record.tags.is_empty() {
        "(no tags)".dimmed().to_string()
    } else {
        format!("[{}]", record.tags.join(", ")).cyan().to_string()
    };

    format!(
        "  {:>3}  {}{} {}",
        index.to_string().dimmed(),
        record.title.bold(),
        year,
        tags
    )
}

/// Short description under a project line, links shown as `label <url>`
#[must_use]
pub fn project_summary(record: &ProjectRecord) -> Option<String> {
    let short = record.desc_short.trim();
    if short.is_empty() {
        None
    } else {
        Some(format!("       {}", markup::plain_text(short).dimmed()))
    }
}

/// Format a tag with usage count
#[must_use]
pub fn tag_with_count(tag: &str, count: usize, quiet: bool) -> String {
    if quiet {
        tag.to_string()
    } else if count == 0 {
        format!("  {tag} {}", "(unused)".dimmed())
    } else {
        format!("  {tag} (used by {count} project(s))")
    }
}
