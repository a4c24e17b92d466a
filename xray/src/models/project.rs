// src/models/project.rs
use serde::{Deserialize, Serialize};

use crate::core::reducer::total_of;
use crate::models::{FileRecord, LanguageStat, LanguageStats, StatKey};

/// An analyzed code project: a name and its flat list of file records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub name: String,
    #[serde(alias = "fileStatList", default)]
    pub files: Vec<FileRecord>,
}

impl Project {
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, files: Vec<FileRecord>) -> Self {
        Self {
            name: name.into(),
            files,
        }
    }

    /// Per-language totals over every record, largest code count first.
    #[inline]
    #[must_use]
    pub fn language_stats(&self) -> Vec<LanguageStat> {
        LanguageStats::reduce(self.files.iter().flat_map(|record| record.stats.iter()))
            .sorted_descending(StatKey::Code)
    }
}

/// Headline numbers for a single project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectSummary {
    pub name: String,
    pub files: usize,
    pub languages: Vec<LanguageStat>,
    pub total: LanguageStat,
}

impl ProjectSummary {
    #[inline]
    #[must_use]
    pub fn from_project(project: &Project) -> Self {
        let languages = project.language_stats();
        let total = total_of(&languages, "total");
        Self {
            name: project.name.clone(),
            files: project.files.len(),
            languages,
            total,
        }
    }

    /// The language with the most code and its share of all code, in percent.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_precision_loss, reason = "Precision not critical")]
    pub fn dominant_language(&self) -> Option<(&str, f64)> {
        let top = self.languages.first()?;
        if self.total.code == 0 {
            return None;
        }
        Some((
            top.name.as_str(),
            (top.code as f64 / self.total.code as f64) * 100.0,
        ))
    }
}
