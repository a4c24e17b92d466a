// src/core/ignore/patterns.rs
use anyhow::{Context as _, Result, anyhow};
use glob::Pattern;

/// Gitignore-flavoured folder patterns matched against project-qualified
/// directory paths such as `myproject/src/generated`.
#[derive(Debug, Default, Clone)]
pub struct Patterns {
    /// Compiled pattern and whether it is a negation (`!pattern`)
    patterns: Vec<(Pattern, bool)>,
}

impl Patterns {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Adds one pattern line.
    ///
    /// - Blank lines and `#` comments are skipped
    /// - `!` negates, re-including folders an earlier pattern excluded
    /// - A leading `/` anchors the pattern at the project name
    /// - A trailing `/` is accepted and ignored, every pattern names folders
    /// - Unanchored patterns match at any depth
    /// - A single `{a,b}` group expands into one pattern per alternative
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * The pattern contains invalid glob syntax
    /// * The pattern has mismatched braces in a group
    #[inline]
    pub fn add_pattern(&mut self, pattern: &str) -> Result<()> {
        let pattern = pattern.trim();
        if pattern.is_empty() || pattern.starts_with('#') {
            return Ok(());
        }

        let (pattern, is_negation) = pattern
            .strip_prefix('!')
            .map_or((pattern, false), |stripped| (stripped, true));
        let is_anchored = pattern.starts_with('/');
        let body = pattern.trim_start_matches('/').trim_end_matches('/');
        if body.is_empty() {
            return Ok(());
        }

        let glob_pattern = if is_anchored {
            body.to_owned()
        } else {
            format!("**/{body}")
        };

        for expanded in expand_group(&glob_pattern)? {
            let compiled = Pattern::new(&expanded)
                .with_context(|| format!("Invalid folder pattern: {expanded}"))?;
            self.patterns.push((compiled, is_negation));
        }
        Ok(())
    }

    /// True if the folder or any of its ancestors matches a pattern and none
    /// of them matches a negated one.
    #[inline]
    #[must_use]
    pub fn matches_dir<S: AsRef<str>>(&self, segments: &[S]) -> bool {
        if self.patterns.is_empty() {
            return false;
        }

        let mut prefixes = Vec::with_capacity(segments.len());
        let mut current = String::new();
        for segment in segments {
            if !current.is_empty() {
                current.push('/');
            }
            current.push_str(segment.as_ref());
            prefixes.push(current.clone());
        }

        let hit = |negated: bool| {
            self.patterns.iter().any(|(pattern, is_neg)| {
                *is_neg == negated && prefixes.iter().any(|prefix| pattern.matches(prefix))
            })
        };
        !hit(true) && hit(false)
    }

    /// Convenience for a `/`-joined path.
    #[inline]
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        self.matches_dir(&segments)
    }
}

fn expand_group(pattern: &str) -> Result<Vec<String>> {
    if !pattern.contains('{') && !pattern.contains('}') {
        return Ok(vec![pattern.to_owned()]);
    }
    let (prefix, suffix) = pattern
        .split_once('{')
        .ok_or_else(|| anyhow!("Invalid pattern: missing opening brace in {pattern}"))?;
    let (alternatives, rest) = suffix
        .split_once('}')
        .ok_or_else(|| anyhow!("Invalid pattern: missing closing brace in {pattern}"))?;
    Ok(alternatives
        .split(',')
        .map(str::trim)
        .map(|alt| format!("{prefix}{alt}{rest}"))
        .collect())
}
