// src/core/builder.rs
use std::collections::HashSet;
use std::iter;

use tracing::debug;

use crate::error::BuildError;
use crate::models::{DirNode, FileRecord};

/// Builds the directory tree of one project from its flat list of file records.
///
/// The root is named after the project and its path is `[project_name]`. Each
/// record's stats land in the `own_stats` of its directory, creating missing
/// directories in first-encounter order. A record with no stats still creates
/// its directories. Once every record is placed, `subtree_stats` is filled in
/// bottom-up. Children are not sorted.
///
/// # Arguments
///
/// * `project_name` - Label of the root node
/// * `records` - The project's file records
/// * `separator` - Character between directory segments in `FileRecord::dir`
///
/// # Errors
///
/// Nothing is built if any record is malformed:
/// * `EmptyProjectName` when `project_name` is blank
/// * `EmptyLanguageName` when a stat has a blank language name
/// * `DuplicateLanguage` when a record lists the same language twice
/// * `EmptySegment` when a directory has an empty segment (`a//b`, `/a`, `a/`)
#[inline]
pub fn build_project_tree(
    project_name: &str,
    records: &[FileRecord],
    separator: char,
) -> Result<DirNode, BuildError> {
    if project_name.trim().is_empty() {
        return Err(BuildError::EmptyProjectName);
    }
    for record in records {
        validate_record(project_name, record, separator)?;
    }

    let mut root = DirNode::project_root(project_name);
    for record in records {
        let mut node = &mut root;
        for segment in record.segments(separator) {
            node = child_entry(node, segment);
        }
        node.own_stats.merge(&record.stats);
    }
    root.refresh_subtree_stats();

    debug!(
        project = project_name,
        records = records.len(),
        nodes = root.node_count(),
        "built project tree"
    );
    Ok(root)
}

fn child_entry<'a>(node: &'a mut DirNode, segment: &str) -> &'a mut DirNode {
    let existing = node
        .children
        .iter()
        .position(|child| child.name == [segment]);
    let index = if let Some(index) = existing {
        index
    } else {
        let mut child = DirNode::new(segment);
        child.path = node
            .path
            .iter()
            .cloned()
            .chain(iter::once(segment.to_owned()))
            .collect();
        node.children.push(child);
        node.children.len().saturating_sub(1)
    };
    &mut node.children[index]
}

fn validate_record(project: &str, record: &FileRecord, separator: char) -> Result<(), BuildError> {
    if record.segments(separator).any(str::is_empty) {
        return Err(BuildError::EmptySegment {
            project: project.to_owned(),
            dir: record.dir.clone(),
        });
    }

    let mut seen = HashSet::new();
    for stat in &record.stats {
        if stat.name.trim().is_empty() {
            return Err(BuildError::EmptyLanguageName {
                project: project.to_owned(),
                dir: record.dir.clone(),
            });
        }
        if !seen.insert(stat.name.as_str()) {
            return Err(BuildError::DuplicateLanguage {
                project: project.to_owned(),
                dir: record.dir.clone(),
                language: stat.name.clone(),
            });
        }
    }
    Ok(())
}
