// src/core/filter.rs
use crate::core::ignore::Patterns;
use crate::models::{DirNode, FileRecord};

/// Folders and languages the user removed from the explosion.
///
/// Folders are project-qualified segment paths, so `["web", "vendor"]`
/// removes `vendor` from the project named `web` only. Prefix checks are
/// segment-wise: excluding `src` leaves `src2` alone.
#[derive(Debug, Default, Clone)]
pub struct Exclusions {
    folders: Vec<Vec<String>>,
    languages: Vec<String>,
    patterns: Patterns,
}

impl Exclusions {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn with_patterns(mut self, patterns: Patterns) -> Self {
        self.patterns = patterns;
        self
    }

    /// Adds a folder prefix. Returns `false` for an empty path or one already excluded.
    #[inline]
    pub fn exclude_folder<S: AsRef<str>>(&mut self, path: &[S]) -> bool {
        let path: Vec<String> = path.iter().map(|s| s.as_ref().to_owned()).collect();
        if path.is_empty() || self.folders.contains(&path) {
            return false;
        }
        self.folders.push(path);
        true
    }

    /// Same as [`Self::exclude_folder`] for a separator-joined path.
    #[inline]
    pub fn exclude_folder_str(&mut self, path: &str, separator: char) -> bool {
        let segments: Vec<&str> = path.split(separator).filter(|s| !s.is_empty()).collect();
        self.exclude_folder(&segments)
    }

    #[inline]
    pub fn include_folder<S: AsRef<str>>(&mut self, path: &[S]) -> bool {
        let before = self.folders.len();
        self.folders.retain(|folder| {
            folder.len() != path.len()
                || folder.iter().zip(path).any(|(a, b)| a.as_str() != b.as_ref())
        });
        self.folders.len() != before
    }

    /// Click-to-exclude: removes the folder a rendered node stands for.
    ///
    /// The multi-project root has no path and is ignored.
    #[inline]
    pub fn exclude_node(&mut self, node: &DirNode) -> bool {
        self.exclude_folder(&node.path)
    }

    #[inline]
    pub fn exclude_language(&mut self, name: &str) -> bool {
        if name.is_empty() || self.languages.iter().any(|l| l == name) {
            return false;
        }
        self.languages.push(name.to_owned());
        true
    }

    #[inline]
    pub fn include_language(&mut self, name: &str) -> bool {
        let before = self.languages.len();
        self.languages.retain(|l| l != name);
        self.languages.len() != before
    }

    #[inline]
    #[must_use]
    pub fn folders(&self) -> &[Vec<String>] {
        &self.folders
    }

    #[inline]
    #[must_use]
    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.folders.is_empty() && self.languages.is_empty() && self.patterns.is_empty()
    }

    /// True if a project-qualified directory is removed by a folder prefix or pattern.
    #[inline]
    #[must_use]
    pub fn excludes_dir(&self, segments: &[&str]) -> bool {
        self.folders.iter().any(|folder| {
            folder.len() <= segments.len()
                && folder.iter().zip(segments).all(|(a, b)| a.as_str() == *b)
        }) || self.patterns.matches_dir(segments)
    }

    #[inline]
    #[must_use]
    pub fn keeps(&self, project: &str, record: &FileRecord, separator: char) -> bool {
        if self
            .languages
            .iter()
            .any(|language| record.mentions_language(language))
        {
            return false;
        }
        let mut segments = vec![project];
        segments.extend(record.segments(separator));
        !self.excludes_dir(&segments)
    }

    /// The records of `project` that survive every exclusion, in input order.
    #[inline]
    #[must_use]
    pub fn filter_records(
        &self,
        project: &str,
        records: &[FileRecord],
        separator: char,
    ) -> Vec<FileRecord> {
        records
            .iter()
            .filter(|record| self.keeps(project, record, separator))
            .cloned()
            .collect()
    }
}
