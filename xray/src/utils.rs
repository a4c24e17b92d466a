// src/utils.rs
use std::fmt::Write as _;

use crate::models::{DirNode, LanguageStat, ProjectSummary, StatKey};

pub fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.file_name().to_str().is_some_and(|s| {
        // Don't consider temp directories as hidden
        if s.starts_with(".tmp") {
            return false;
        }
        s.starts_with('.')
    })
}

/// Indented outline of the tree, one node per line with its subtree totals.
///
/// `max_depth` of `Some(0)` prints the root only.
#[must_use]
pub fn render_tree(root: &DirNode, separator: char, max_depth: Option<usize>) -> String {
    let mut out = String::new();
    render_node(&mut out, root, separator, 0, max_depth);
    out
}

fn render_node(
    out: &mut String,
    node: &DirNode,
    separator: char,
    depth: usize,
    max_depth: Option<usize>,
) {
    let indent = "  ".repeat(depth);
    let _ = writeln!(
        out,
        "{indent}{}  ({} code, {} files)",
        node.display_name(separator),
        node.weight(StatKey::Code),
        node.weight(StatKey::Files),
    );
    if max_depth.is_some_and(|max| depth >= max) {
        return;
    }
    for child in &node.children {
        render_node(out, child, separator, depth.saturating_add(1), max_depth);
    }
}

#[must_use]
pub fn render_language_table(stats: &[LanguageStat]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<20} {:>8} {:>8} {:>8} {:>6}",
        "Language", "Code", "Comment", "Blank", "Files"
    );
    for stat in stats {
        let _ = writeln!(
            out,
            "{:<20} {:>8} {:>8} {:>8} {:>6}",
            stat.name, stat.code, stat.comment, stat.blank, stat.files
        );
    }
    out
}

#[must_use]
pub fn render_summary(summary: &ProjectSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Project: {}", summary.name);
    let _ = writeln!(out, "Directories with files: {}", summary.files);
    let _ = writeln!(
        out,
        "Lines: {} ({} code, {} comment, {} blank)",
        summary.total.lines(),
        summary.total.code,
        summary.total.comment,
        summary.total.blank
    );
    if let Some((language, share)) = summary.dominant_language() {
        let _ = writeln!(out, "Dominant language: {language} ({share:.2}%)");
    }
    out
}
