// src/models/stat_list.rs
use serde::{Deserialize, Serialize};

use crate::core::reducer::{merge_into, reduce_by_name, sort_descending_by};
use crate::models::{LanguageStat, StatKey};

/// Per-language aggregate, one entry per language name.
///
/// Entry order carries no meaning, so equality compares the entries keyed by name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageStats(Vec<LanguageStat>);

impl LanguageStats {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    #[inline]
    #[must_use]
    pub fn reduce<'a, I>(stats: I) -> Self
    where
        I: IntoIterator<Item = &'a LanguageStat>,
    {
        Self(reduce_by_name(stats))
    }

    #[inline]
    pub fn merge<'a, I>(&mut self, stats: I)
    where
        I: IntoIterator<Item = &'a LanguageStat>,
    {
        merge_into(&mut self.0, stats);
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, LanguageStat> {
        self.0.iter()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[LanguageStat] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when no entry counts a single line or file.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(LanguageStat::is_zero)
    }

    #[inline]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&LanguageStat> {
        self.0.iter().find(|stat| stat.name == name)
    }

    /// Sum of `key` across every language.
    #[inline]
    #[must_use]
    pub fn total(&self, key: StatKey) -> u64 {
        self.0
            .iter()
            .fold(0_u64, |acc, stat| acc.saturating_add(stat.get(key)))
    }

    #[inline]
    #[must_use]
    pub fn sorted_descending(&self, key: StatKey) -> Vec<LanguageStat> {
        let mut sorted = self.0.clone();
        sort_descending_by(&mut sorted, key);
        sorted
    }

    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<LanguageStat> {
        self.0
    }
}

impl PartialEq for LanguageStats {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|stat| other.get(&stat.name).is_some_and(|found| found == stat))
    }
}

impl Eq for LanguageStats {}

impl From<Vec<LanguageStat>> for LanguageStats {
    #[inline]
    fn from(stats: Vec<LanguageStat>) -> Self {
        Self::reduce(&stats)
    }
}

impl<'a> IntoIterator for &'a LanguageStats {
    type Item = &'a LanguageStat;
    type IntoIter = std::slice::Iter<'a, LanguageStat>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
