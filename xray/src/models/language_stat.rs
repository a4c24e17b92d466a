// src/models/language_stat.rs
use serde::{Deserialize, Serialize};

const fn one_file() -> u64 {
    1
}

/// Line counts for one language.
///
/// A freshly deserialized stat describes a single file, so `files` defaults to 1.
/// Aggregates produced by the reducer carry the summed file count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageStat {
    pub name: String,
    #[serde(default)]
    pub code: u64,
    #[serde(default)]
    pub comment: u64,
    #[serde(default)]
    pub blank: u64,
    #[serde(default = "one_file")]
    pub files: u64,
}

impl LanguageStat {
    /// Counts for a single file written in `name`.
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, code: u64, comment: u64, blank: u64) -> Self {
        Self {
            name: name.into(),
            code,
            comment,
            blank,
            files: 1,
        }
    }

    #[inline]
    #[must_use]
    pub fn zero(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: 0,
            comment: 0,
            blank: 0,
            files: 0,
        }
    }

    #[inline]
    #[must_use]
    pub fn with_files(mut self, files: u64) -> Self {
        self.files = files;
        self
    }

    #[inline]
    #[must_use]
    pub const fn lines(&self) -> u64 {
        self.code.saturating_add(self.comment).saturating_add(self.blank)
    }

    #[inline]
    #[must_use]
    pub const fn get(&self, key: StatKey) -> u64 {
        match key {
            StatKey::Code => self.code,
            StatKey::Comment => self.comment,
            StatKey::Blank => self.blank,
            StatKey::Files => self.files,
            StatKey::Lines => self.lines(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.code == 0 && self.comment == 0 && self.blank == 0 && self.files == 0
    }

    /// Adds every numeric field of `other` into `self`. Names are not compared.
    #[inline]
    pub fn accumulate(&mut self, other: &Self) {
        self.code = self.code.saturating_add(other.code);
        self.comment = self.comment.saturating_add(other.comment);
        self.blank = self.blank.saturating_add(other.blank);
        self.files = self.files.saturating_add(other.files);
    }
}

/// Numeric field used for ordering stats and nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StatKey {
    #[default]
    Code,
    Comment,
    Blank,
    Files,
    /// code + comment + blank
    Lines,
}
