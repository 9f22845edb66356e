// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Season and episode catalog.
//!
//! The catalog is derived once from the `season:` and `episode:` tags of a
//! content collection and is read-only afterwards. It is passed explicitly
//! to whatever needs it rather than held in a global.

use std::collections::{BTreeMap, BTreeSet};

use crate::content::Event;

/// Season → episode membership table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    seasons: BTreeMap<u32, BTreeSet<u32>>,
    all_episodes: BTreeSet<u32>,
}

impl Catalog {
    /// Build the catalog from events tagged with both a season and an episode.
    pub fn from_events(events: &[Event]) -> Self {
        events
            .iter()
            .filter_map(|e| Some((e.season()?, e.episode()?)))
            .collect()
    }

    pub fn from_map(seasons: BTreeMap<u32, BTreeSet<u32>>) -> Self {
        let all_episodes = seasons.values().flatten().copied().collect();
        Catalog {
            seasons,
            all_episodes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.seasons.is_empty()
    }

    /// Known seasons, ascending.
    pub fn seasons(&self) -> impl Iterator<Item = u32> + '_ {
        self.seasons.keys().copied()
    }

    /// Episodes of a season, ascending. `None` for an unknown season.
    pub fn episodes_for(&self, season: u32) -> Option<&BTreeSet<u32>> {
        self.seasons.get(&season)
    }

    /// Every episode number across all seasons, ascending and deduplicated.
    pub fn all_episodes(&self) -> &BTreeSet<u32> {
        &self.all_episodes
    }

    pub fn contains_season(&self, season: u32) -> bool {
        self.seasons.contains_key(&season)
    }

    pub fn contains_episode(&self, episode: u32) -> bool {
        self.all_episodes.contains(&episode)
    }

    pub fn is_valid_episode_for_season(&self, season: u32, episode: u32) -> bool {
        self.episodes_for(season)
            .is_some_and(|episodes| episodes.contains(&episode))
    }

    pub fn max_episode_for_season(&self, season: u32) -> Option<u32> {
        self.episodes_for(season)?.last().copied()
    }
}

impl FromIterator<(u32, u32)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (u32, u32)>>(iter: I) -> Self {
        let mut seasons: BTreeMap<u32, BTreeSet<u32>> = BTreeMap::new();
        for (season, episode) in iter {
            seasons.entry(season).or_default().insert(episode);
        }
        Catalog::from_map(seasons)
    }
}

/// Join numbers as `1, 2, 3` for messages.
pub(crate) fn join_numbers(numbers: impl IntoIterator<Item = u32>) -> String {
    let joined = numbers
        .into_iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    if joined.is_empty() {
        "(none)".to_string()
    } else {
        joined
    }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
