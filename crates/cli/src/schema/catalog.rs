// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use schemars::JsonSchema;
use serde::Serialize;
use sl_core::Catalog;

/// JSON output of `catalog -o json`.
#[derive(Debug, JsonSchema, Serialize)]
pub struct CatalogOutputJson {
    /// Seasons in ascending order.
    pub seasons: Vec<SeasonJson>,
    /// Every episode number across seasons, ascending.
    pub all_episodes: Vec<u32>,
}

/// A single season and its episodes.
#[derive(Debug, JsonSchema, Serialize)]
pub struct SeasonJson {
    pub season: u32,
    pub episodes: Vec<u32>,
    pub max_episode: Option<u32>,
}

impl From<&Catalog> for CatalogOutputJson {
    fn from(catalog: &Catalog) -> Self {
        CatalogOutputJson {
            seasons: catalog
                .seasons()
                .map(|season| SeasonJson {
                    season,
                    episodes: catalog
                        .episodes_for(season)
                        .map(|eps| eps.iter().copied().collect())
                        .unwrap_or_default(),
                    max_episode: catalog.max_episode_for_season(season),
                })
                .collect(),
            all_episodes: catalog.all_episodes().iter().copied().collect(),
        }
    }
}
