// src/core/fuse.rs
use crate::models::DirNode;

pub const DEFAULT_COMPOSITE_NAME: &str = "Composite Project";

/// Puts several project trees under one root.
///
/// A single tree is returned as is. Two or more trees become the children of a
/// new multi-project root, in input order and without merging same-named
/// projects. No trees at all yield an empty multi-project root.
#[inline]
#[must_use]
pub fn fuse_projects(mut trees: Vec<DirNode>, composite_name: &str) -> DirNode {
    if trees.len() == 1 {
        if let Some(tree) = trees.pop() {
            return tree;
        }
    }

    let mut root = DirNode::multi_project_root(composite_name);
    root.children = trees;
    root.recompute_own_subtree();
    root
}
