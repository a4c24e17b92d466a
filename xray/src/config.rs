// src/config.rs
use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::core::arrange::EmptyDirPolicy;
use crate::core::filter::Exclusions;
use crate::core::ignore::find_upwards;
use crate::core::pipeline::TreeOptions;
use crate::models::StatKey;

pub const CONFIG_FILE_NAME: &str = "xray.toml";

/// Contents of `xray.toml`. Every key is optional.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub separator: Option<char>,
    pub collapse: Option<bool>,
    pub prune_empty: Option<bool>,
    pub sort: Option<StatKey>,
    pub composite_name: Option<String>,
    /// Languages hidden unless re-included
    pub exclude_languages: Vec<String>,
    /// Project-qualified folders, written with the separator
    pub exclude_folders: Vec<String>,
}

impl Settings {
    #[inline]
    #[must_use]
    pub fn tree_options(&self) -> TreeOptions {
        let defaults = TreeOptions::default();
        TreeOptions {
            separator: self.separator.unwrap_or(defaults.separator),
            collapse: self.collapse.unwrap_or(defaults.collapse),
            empty_dirs: match self.prune_empty {
                Some(true) => EmptyDirPolicy::Prune,
                Some(false) | None => defaults.empty_dirs,
            },
            sort: self.sort.or(defaults.sort),
            composite_name: self
                .composite_name
                .clone()
                .unwrap_or(defaults.composite_name),
        }
    }

    /// Adds the configured folder and language exclusions to `exclusions`.
    #[inline]
    pub fn apply_exclusions(&self, exclusions: &mut Exclusions, separator: char) {
        for folder in &self.exclude_folders {
            exclusions.exclude_folder_str(folder, separator);
        }
        for language in &self.exclude_languages {
            exclusions.exclude_language(language);
        }
    }
}

/// Parses a settings file.
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be read
/// * The file is not valid TOML or has unknown keys
#[inline]
pub fn read_settings(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let settings: Settings = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    debug!(path = %path.display(), "loaded settings");
    Ok(settings)
}

/// Settings from the nearest `xray.toml` at or above `dir`, or the defaults.
///
/// # Errors
///
/// This function may return an error if a config file is found but cannot be read or parsed.
#[inline]
pub fn load_settings(dir: &Path) -> Result<Settings> {
    match find_upwards(dir, CONFIG_FILE_NAME) {
        Some(path) => read_settings(&path),
        None => Ok(Settings::default()),
    }
}
