// src/core/ignore/loader.rs
use crate::core::ignore::Patterns;
use anyhow::{Context as _, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

pub const IGNORE_FILE_NAME: &str = ".xrayignore";

/// Finds `file_name` in `dir` or the closest parent directory containing it.
#[inline]
#[must_use]
pub fn find_upwards(dir: &Path, file_name: &str) -> Option<PathBuf> {
    let mut current_dir = dir.to_path_buf();
    let mut visited = HashSet::new();

    while visited.insert(current_dir.clone()) {
        let candidate = current_dir.join(file_name);
        if candidate.is_file() {
            return Some(candidate);
        }
        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => break,
        }
    }
    None
}

/// Reads folder patterns, one per line, from a file.
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be read
/// * A line contains invalid pattern syntax
#[inline]
pub fn read_ignore_file(path: &Path) -> Result<Patterns> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read ignore file: {}", path.display()))?;

    let mut patterns = Patterns::new();
    for line in content.lines() {
        patterns
            .add_pattern(line)
            .with_context(|| format!("Invalid line in {}: {line}", path.display()))?;
    }
    Ok(patterns)
}

/// Loads folder patterns from the nearest `.xrayignore`, starting at `dir`
/// and walking up through its parents. No file means no patterns.
///
/// # Errors
///
/// This function may return an error if:
/// * The .xrayignore file exists but cannot be read
/// * The file contains invalid pattern syntax
#[inline]
pub fn load_ignore_patterns(dir: &Path) -> Result<Patterns> {
    match find_upwards(dir, IGNORE_FILE_NAME) {
        Some(path) => read_ignore_file(&path),
        None => Ok(Patterns::new()),
    }
}
