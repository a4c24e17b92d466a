// src/core/collapse.rs
use tracing::debug;

use crate::models::DirNode;

/// Merges every chain of file-less, single-child directories into one node.
///
/// A run `a -> b -> c` where `a` and `b` hold no files of their own and have
/// exactly one child becomes a single node named `a/b/c` carrying the path,
/// children and stats of `c`. Roots are never merged into their child. The
/// transform is lossless and idempotent.
///
/// Returns the number of directories merged away.
#[inline]
pub fn collapse_degenerate(root: &mut DirNode) -> usize {
    let merged = collapse_children(root);
    debug!(merged, "collapsed degenerate directories");
    merged
}

fn collapse_children(node: &mut DirNode) -> usize {
    let mut merged = 0_usize;
    for child in &mut node.children {
        merged = merged.saturating_add(collapse_children(child));
        while is_degenerate(child) {
            absorb_only_child(child);
            merged = merged.saturating_add(1);
        }
    }
    merged
}

fn is_degenerate(node: &DirNode) -> bool {
    !node.is_root() && node.children.len() == 1 && node.own_stats.is_zero()
}

fn absorb_only_child(node: &mut DirNode) {
    let Some(only) = node.children.pop() else {
        return;
    };
    let DirNode {
        name,
        path,
        own_stats,
        subtree_stats,
        children,
        ..
    } = only;
    // all-zero entries of the absorbed level are carried so no language disappears
    let carried = std::mem::replace(&mut node.own_stats, own_stats);
    node.own_stats.merge(&carried);
    node.subtree_stats = subtree_stats;
    node.subtree_stats.merge(&carried);
    node.name.extend(name);
    node.path = path;
    node.children = children;
}
