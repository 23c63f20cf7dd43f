//! CLI output formatting.
//!
//! Output is information-centric, not file-centric: the primary display for
//! every entity (link column, image, tip) is its semantic identity — title
//! and positional index — with targets and sources as secondary context.
//!
//! ```text
//! Footer links
//! 001 Product (3 links)
//!     001 Features → /#features
//! ...
//!
//! Side panel
//! 001 Doctor Consultation
//!     Source: https://images.unsplash.com/...
//!
//! Health tips (10)
//! ```
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::generate::GenerateSummary;
use crate::nav::Category;
use crate::{catalog, tips};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Content inventory for the `check` command.
pub fn format_check_output() -> Vec<String> {
    let mut lines = Vec::new();

    lines.push("Footer links".to_string());
    for (pos, category) in Category::ALL.iter().enumerate() {
        let entries = category.entries();
        lines.push(format!(
            "{} {} ({} links)",
            format_index(pos + 1),
            category.title(),
            entries.len()
        ));
        for (entry_pos, entry) in entries.iter().enumerate() {
            lines.push(format!(
                "{}{} {} → {}",
                indent(1),
                format_index(entry_pos + 1),
                entry.name,
                entry.href
            ));
        }
    }

    lines.push(String::new());
    lines.push("Side panel".to_string());
    for (pos, record) in catalog::side_images().iter().enumerate() {
        lines.push(format!("{} {}", format_index(pos + 1), record.title));
        lines.push(format!("{}Source: {}", indent(1), record.url));
    }

    lines.push(String::new());
    lines.push(format!("Health tips ({})", tips::health_tips().len()));

    lines
}

pub fn print_check_output() {
    for line in format_check_output() {
        println!("{}", line);
    }
}

/// Render summary for the `render` command: fragment → file, with counts.
pub fn format_generate_output(summary: &GenerateSummary) -> Vec<String> {
    vec![
        format!(
            "footer → footer.html ({} columns, {} links)",
            summary.columns, summary.links
        ),
        format!("side panel → side-panel.html ({} images)", summary.images),
        format!("health tips → health-tips.html ({} tips)", summary.tips),
        "manifest → side-images.json".to_string(),
        "preview → index.html".to_string(),
        String::new(),
        format!("Generated {} files", summary.files.len()),
    ]
}

pub fn print_generate_output(summary: &GenerateSummary) {
    for line in format_generate_output(summary) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_output_lists_categories_with_counts() {
        let lines = format_check_output();
        assert!(lines.contains(&"001 Product (3 links)".to_string()));
        assert!(lines.contains(&"004 Legal (3 links)".to_string()));
    }

    #[test]
    fn check_output_shows_link_targets() {
        let lines = format_check_output();
        assert!(lines.contains(&"    001 Features → /#features".to_string()));
        assert!(lines.contains(&"    002 Terms → /terms".to_string()));
    }

    #[test]
    fn check_output_shows_image_sources_indented() {
        let lines = format_check_output();
        let title_pos = lines
            .iter()
            .position(|l| l == "001 Doctor Consultation")
            .unwrap();
        assert!(lines[title_pos + 1].starts_with("    Source: https://"));
    }

    #[test]
    fn check_output_counts_tips() {
        let lines = format_check_output();
        assert!(lines.contains(&"Health tips (10)".to_string()));
    }

    #[test]
    fn generate_output_reports_every_file() {
        let summary = GenerateSummary {
            files: vec![
                "footer.html",
                "side-panel.html",
                "health-tips.html",
                "side-images.json",
                "index.html",
            ],
            columns: 4,
            links: 12,
            images: 3,
            tips: 10,
        };
        let lines = format_generate_output(&summary);
        assert!(lines.contains(&"footer → footer.html (4 columns, 12 links)".to_string()));
        assert!(lines.contains(&"side panel → side-panel.html (3 images)".to_string()));
        assert!(lines.contains(&"Generated 5 files".to_string()));
    }
}
