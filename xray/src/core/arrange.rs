// src/core/arrange.rs
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{DirNode, StatKey};

/// What to do with directories that end up holding no counted lines or files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyDirPolicy {
    #[default]
    Keep,
    Prune,
}

/// Drops every non-root subtree whose totals are all zero.
///
/// Returns the number of nodes removed.
#[inline]
pub fn prune_empty(root: &mut DirNode) -> usize {
    let removed = prune_children(root);
    root.refresh_subtree_stats();
    debug!(removed, "pruned empty directories");
    removed
}

fn prune_children(node: &mut DirNode) -> usize {
    let before = node.node_count();
    node.children
        .retain(|child| child.is_root() || !child.subtree_stats.is_zero());
    for child in &mut node.children {
        prune_children(child);
    }
    before.saturating_sub(node.node_count())
}

/// Orders every node's children by subtree `key` total, largest first.
///
/// The sort is stable, so equal weights keep their construction order.
#[inline]
pub fn sort_children(root: &mut DirNode, key: StatKey) {
    root.children
        .sort_by(|a, b| b.weight(key).cmp(&a.weight(key)));
    for child in &mut root.children {
        sort_children(child, key);
    }
}
