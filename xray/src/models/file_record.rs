// src/models/file_record.rs
use serde::{Deserialize, Serialize};

use crate::models::LanguageStat;

/// One file's containing directory and its per-language counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    #[serde(alias = "directoryPath", default)]
    pub dir: String,
    #[serde(alias = "languageStats", default)]
    pub stats: Vec<LanguageStat>,
}

impl FileRecord {
    #[inline]
    #[must_use]
    pub fn new(dir: impl Into<String>, stats: Vec<LanguageStat>) -> Self {
        Self {
            dir: dir.into(),
            stats,
        }
    }

    /// Directory segments, or nothing when the file sits at the project root.
    #[inline]
    pub fn segments(&self, separator: char) -> impl Iterator<Item = &str> {
        let dir = self.dir.as_str();
        (!dir.is_empty())
            .then(|| dir.split(separator))
            .into_iter()
            .flatten()
    }

    #[inline]
    #[must_use]
    pub fn mentions_language(&self, name: &str) -> bool {
        self.stats.iter().any(|stat| stat.name == name)
    }
}
