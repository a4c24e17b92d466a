// src/core/reducer.rs
use std::collections::HashMap;

use crate::models::{LanguageStat, StatKey};

/// Merges any number of stats into one entry per language name, summing every field.
///
/// Entries come out in the order their name was first seen.
#[inline]
#[must_use]
pub fn reduce_by_name<'a, I>(stats: I) -> Vec<LanguageStat>
where
    I: IntoIterator<Item = &'a LanguageStat>,
{
    let mut reduced = Vec::new();
    merge_into(&mut reduced, stats);
    reduced
}

/// Folds `stats` into an already reduced list in place.
#[inline]
pub fn merge_into<'a, I>(target: &mut Vec<LanguageStat>, stats: I)
where
    I: IntoIterator<Item = &'a LanguageStat>,
{
    let mut index: HashMap<String, usize> = target
        .iter()
        .enumerate()
        .map(|(pos, stat)| (stat.name.clone(), pos))
        .collect();

    for stat in stats {
        if let Some(slot) = index.get(&stat.name).and_then(|&pos| target.get_mut(pos)) {
            slot.accumulate(stat);
        } else {
            index.insert(stat.name.clone(), target.len());
            target.push(stat.clone());
        }
    }
}

/// Stable sort, largest `key` first. Ties keep their current relative order.
#[inline]
pub fn sort_descending_by(stats: &mut [LanguageStat], key: StatKey) {
    stats.sort_by(|a, b| b.get(key).cmp(&a.get(key)));
}

/// Sum of every stat, reported under `name`.
#[inline]
#[must_use]
pub fn total_of(stats: &[LanguageStat], name: &str) -> LanguageStat {
    stats.iter().fold(LanguageStat::zero(name), |mut acc, stat| {
        acc.accumulate(stat);
        acc
    })
}
