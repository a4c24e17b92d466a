// src/models/dir_node.rs
use serde::Serialize;

use crate::models::{LanguageStats, StatKey};

/// What a node stands for in the exploded tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Root of a single project's tree. Its path is the project name.
    ProjectRoot,
    /// A directory, or a collapsed chain of directories.
    Directory,
    /// Synthetic root holding several project trees side by side.
    MultiProjectRoot,
}

/// One directory (or collapsed chain of directories) with its aggregates.
///
/// `name` and `path` are kept as segments and only joined for display.
/// `subtree_stats` always equals the reduction of `own_stats` with every
/// child's `subtree_stats`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirNode {
    pub kind: NodeKind,
    pub name: Vec<String>,
    pub path: Vec<String>,
    pub own_stats: LanguageStats,
    pub subtree_stats: LanguageStats,
    pub children: Vec<DirNode>,
}

impl DirNode {
    /// An empty directory node. The caller sets `path`.
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Directory,
            name: vec![name.into()],
            path: Vec::new(),
            own_stats: LanguageStats::new(),
            subtree_stats: LanguageStats::new(),
            children: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn project_root(project: impl Into<String>) -> Self {
        let mut node = Self::new(project);
        node.kind = NodeKind::ProjectRoot;
        node.path.clone_from(&node.name);
        node
    }

    /// Synthetic root for several projects. Any display name is allowed.
    #[inline]
    #[must_use]
    pub fn multi_project_root(display_name: impl Into<String>) -> Self {
        let mut node = Self::new(display_name);
        node.kind = NodeKind::MultiProjectRoot;
        node
    }

    #[inline]
    #[must_use]
    pub const fn is_root(&self) -> bool {
        matches!(self.kind, NodeKind::ProjectRoot | NodeKind::MultiProjectRoot)
    }

    #[inline]
    #[must_use]
    pub fn display_name(&self, separator: char) -> String {
        join(&self.name, separator)
    }

    #[inline]
    #[must_use]
    pub fn display_path(&self, separator: char) -> String {
        join(&self.path, separator)
    }

    #[inline]
    #[must_use]
    pub fn child(&self, name: &[&str]) -> Option<&Self> {
        self.children.iter().find(|child| child.name == name)
    }

    /// Path relative to this node, one segment per nesting level.
    #[inline]
    #[must_use]
    pub fn descendant(&self, names: &[&[&str]]) -> Option<&Self> {
        names
            .iter()
            .try_fold(self, |node, name| node.child(name))
    }

    /// Recomputes `subtree_stats` bottom-up for this node and every descendant.
    #[inline]
    pub fn refresh_subtree_stats(&mut self) {
        for child in &mut self.children {
            child.refresh_subtree_stats();
        }
        self.recompute_own_subtree();
    }

    /// Recomputes `subtree_stats` of this node from its children's current values.
    #[inline]
    pub fn recompute_own_subtree(&mut self) {
        let mut subtree = self.own_stats.clone();
        for child in &self.children {
            subtree.merge(&child.subtree_stats);
        }
        self.subtree_stats = subtree;
    }

    /// Checks the aggregate invariant on this node and all descendants.
    #[inline]
    #[must_use]
    pub fn aggregates_consistent(&self) -> bool {
        let mut expected = self.own_stats.clone();
        for child in &self.children {
            expected.merge(&child.subtree_stats);
        }
        expected == self.subtree_stats && self.children.iter().all(Self::aggregates_consistent)
    }

    /// Own stats of every node in the tree, flattened into one reduction.
    #[inline]
    #[must_use]
    pub fn flattened_own_stats(&self) -> LanguageStats {
        let mut flat = LanguageStats::new();
        self.visit(&mut |node| flat.merge(&node.own_stats));
        flat
    }

    #[inline]
    #[must_use]
    pub fn weight(&self, key: StatKey) -> u64 {
        self.subtree_stats.total(key)
    }

    /// Pre-order traversal.
    #[inline]
    pub fn visit<'a, F>(&'a self, f: &mut F)
    where
        F: FnMut(&'a Self),
    {
        f(self);
        for child in &self.children {
            child.visit(f);
        }
    }

    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        let mut count = 0_usize;
        self.visit(&mut |_| count = count.saturating_add(1));
        count
    }
}

#[inline]
#[must_use]
pub fn join(segments: &[String], separator: char) -> String {
    let mut buf = [0_u8; 4];
    let sep: &str = separator.encode_utf8(&mut buf);
    segments.join(sep)
}
