// src/core/pipeline.rs
use tracing::{debug, info};

use crate::core::arrange::{EmptyDirPolicy, prune_empty, sort_children};
use crate::core::builder::build_project_tree;
use crate::core::collapse::collapse_degenerate;
use crate::core::filter::Exclusions;
use crate::core::fuse::{DEFAULT_COMPOSITE_NAME, fuse_projects};
use crate::core::reducer::{reduce_by_name, sort_descending_by};
use crate::error::BuildError;
use crate::models::{DirNode, LanguageStat, Project, StatKey};

pub const DEFAULT_SEPARATOR: char = '/';

/// Knobs for turning projects into one exploded tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeOptions {
    pub separator: char,
    pub collapse: bool,
    pub empty_dirs: EmptyDirPolicy,
    pub sort: Option<StatKey>,
    pub composite_name: String,
}

impl Default for TreeOptions {
    #[inline]
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            collapse: true,
            empty_dirs: EmptyDirPolicy::Keep,
            sort: None,
            composite_name: DEFAULT_COMPOSITE_NAME.to_owned(),
        }
    }
}

/// Filters, builds, tidies and fuses every project into the tree handed to a renderer.
///
/// Per project: exclusions, tree building, optional empty-folder pruning and
/// optional collapsing. The per-project trees are then fused and, when a sort
/// key is set, every level of the fused tree is ordered by it.
///
/// # Errors
///
/// Returns the first [`BuildError`] raised while building a project tree.
#[inline]
pub fn build_explosion(
    projects: &[Project],
    exclusions: &Exclusions,
    options: &TreeOptions,
) -> Result<DirNode, BuildError> {
    let mut trees = Vec::with_capacity(projects.len());
    for project in projects {
        let records = exclusions.filter_records(&project.name, &project.files, options.separator);
        debug!(
            project = %project.name,
            kept = records.len(),
            dropped = project.files.len().saturating_sub(records.len()),
            "filtered file records"
        );

        let mut tree = build_project_tree(&project.name, &records, options.separator)?;
        if options.empty_dirs == EmptyDirPolicy::Prune {
            prune_empty(&mut tree);
        }
        if options.collapse {
            collapse_degenerate(&mut tree);
        }
        trees.push(tree);
    }

    let mut root = fuse_projects(trees, &options.composite_name);
    if let Some(key) = options.sort {
        sort_children(&mut root, key);
    }
    info!(
        projects = projects.len(),
        nodes = root.node_count(),
        code = root.weight(StatKey::Code),
        "built explosion tree"
    );
    Ok(root)
}

/// Language totals across all projects, most code first, for language pickers.
#[inline]
#[must_use]
pub fn combined_language_stats(projects: &[Project]) -> Vec<LanguageStat> {
    let mut combined = reduce_by_name(
        projects
            .iter()
            .flat_map(|project| project.files.iter())
            .flat_map(|record| record.stats.iter()),
    );
    sort_descending_by(&mut combined, StatKey::Code);
    combined
}
