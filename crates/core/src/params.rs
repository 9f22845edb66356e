// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Spoiler filter parameters.
//!
//! Raw parameters arrive as flat, optional strings (typically URL query
//! parameters). [`parse_filter_params`] turns them into a typed
//! [`FilterState`], validating season and episode against a [`Catalog`].
//!
//! | key       | absent / empty | invalid                         |
//! |-----------|----------------|---------------------------------|
//! | `season`  | no season      | error                           |
//! | `episode` | no episode     | error                           |
//! | `showAll` | `false`        | `false` (only `"true"` is true) |
//! | `reveal`  | empty set      | bad tokens dropped              |
//! | `layout`  | `list`         | error                           |

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::catalog::{join_numbers, Catalog};
use crate::error::{Error, Result};

/// Unvalidated filter parameters. `Some` means the key was present, even
/// with an empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawParams {
    pub season: Option<String>,
    pub episode: Option<String>,
    pub show_all: Option<String>,
    pub reveal: Option<String>,
    pub layout: Option<String>,
}

impl RawParams {
    /// Record a parameter. The first value for a key wins; unknown keys
    /// are ignored. Returns whether the key was recognized.
    pub fn insert(&mut self, key: &str, value: impl Into<String>) -> bool {
        let slot = match key {
            "season" => &mut self.season,
            "episode" => &mut self.episode,
            "showAll" => &mut self.show_all,
            "reveal" => &mut self.reveal,
            "layout" => &mut self.layout,
            _ => return false,
        };
        if slot.is_none() {
            *slot = Some(value.into());
        }
        true
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for RawParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut raw = RawParams::default();
        for (key, value) in iter {
            raw.insert(key.as_ref(), value);
        }
        raw
    }
}

/// How the timeline is laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    #[default]
    List,
    Grid,
}

impl Layout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::List => "list",
            Layout::Grid => "grid",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Layout {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "list" => Ok(Layout::List),
            "grid" => Ok(Layout::Grid),
            _ => Err(Error::NotAllowed {
                field: "layout",
                value: s.to_string(),
                allowed: "list, grid".to_string(),
            }),
        }
    }
}

/// An item the viewer chose to reveal despite the spoiler filter.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[serde(untagged)]
pub enum RevealKey {
    /// Position in the displayed timeline.
    Index(usize),
    /// Event id.
    Id(String),
}

/// Validated spoiler filter state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct FilterState {
    pub season: Option<u32>,
    pub episode: Option<u32>,
    pub show_all: bool,
    pub reveal: BTreeSet<RevealKey>,
    pub layout: Layout,
}

impl FilterState {
    /// Whether the item at `index` with `id` was explicitly revealed.
    pub fn is_revealed(&self, index: usize, id: &str) -> bool {
        self.reveal.contains(&RevealKey::Index(index))
            || self.reveal.contains(&RevealKey::Id(id.to_string()))
    }

    /// Whether an item tagged with `season`/`episode` lies past the
    /// viewer's watched point.
    ///
    /// Nothing is a spoiler when `show_all` is set or no season is chosen.
    /// Without a chosen episode the whole chosen season counts as watched.
    /// Items without a season tag are never spoilers.
    pub fn is_spoiler(&self, season: Option<u32>, episode: Option<u32>) -> bool {
        if self.show_all {
            return false;
        }
        let (Some(watched_season), Some(season)) = (self.season, season) else {
            return false;
        };
        match season.cmp(&watched_season) {
            std::cmp::Ordering::Greater => true,
            std::cmp::Ordering::Less => false,
            std::cmp::Ordering::Equal => match (self.episode, episode) {
                (Some(watched), Some(episode)) => episode > watched,
                _ => false,
            },
        }
    }
}

/// Parse and validate raw filter parameters against a catalog.
///
/// # Errors
///
/// Returns a field-attributed error for a malformed or unknown season or
/// episode, an episode outside the chosen season, or an unknown layout.
pub fn parse_filter_params(raw: &RawParams, catalog: &Catalog) -> Result<FilterState> {
    let season = parse_positive("season", raw.season.as_deref(), || {
        join_numbers(catalog.seasons())
    })?;
    if let Some(season) = season {
        if !catalog.contains_season(season) {
            return Err(Error::NotAllowed {
                field: "season",
                value: season.to_string(),
                allowed: join_numbers(catalog.seasons()),
            });
        }
    }

    let episode = parse_positive("episode", raw.episode.as_deref(), || {
        join_numbers(catalog.all_episodes().iter().copied())
    })?;
    if let Some(episode) = episode {
        if !catalog.contains_episode(episode) {
            return Err(Error::NotAllowed {
                field: "episode",
                value: episode.to_string(),
                allowed: join_numbers(catalog.all_episodes().iter().copied()),
            });
        }
    }

    if let (Some(season), Some(episode)) = (season, episode) {
        if !catalog.is_valid_episode_for_season(season, episode) {
            let allowed = catalog
                .episodes_for(season)
                .map(|eps| join_numbers(eps.iter().copied()))
                .unwrap_or_else(|| join_numbers(Vec::new()));
            return Err(Error::NotAllowed {
                field: "episode",
                value: episode.to_string(),
                allowed: format!("{allowed} (season {season})"),
            });
        }
    }

    let layout = match non_empty(raw.layout.as_deref()) {
        Some(value) => value.parse()?,
        None => Layout::default(),
    };

    Ok(FilterState {
        season,
        episode,
        show_all: raw.show_all.as_deref() == Some("true"),
        reveal: parse_reveal(raw.reveal.as_deref()),
        layout,
    })
}

/// Whether the caller supplied filter controls at all.
///
/// Only key presence matters: `season=not-a-number` still counts.
pub fn has_filter_params(raw: &RawParams) -> bool {
    raw.season.is_some() || raw.show_all.is_some()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// A positive integer, or `NotAllowed` naming the values `allowed` lists.
fn parse_positive(
    field: &'static str,
    value: Option<&str>,
    allowed: impl FnOnce() -> String,
) -> Result<Option<u32>> {
    let Some(value) = non_empty(value) else {
        return Ok(None);
    };
    match value.parse::<u32>() {
        Ok(n) if n > 0 => Ok(Some(n)),
        _ => Err(Error::NotAllowed {
            field,
            value: value.to_string(),
            allowed: allowed(),
        }),
    }
}

/// Parse a comma-separated reveal list, dropping unusable tokens.
fn parse_reveal(value: Option<&str>) -> BTreeSet<RevealKey> {
    let Some(value) = non_empty(value) else {
        return BTreeSet::new();
    };
    value
        .split(',')
        .filter_map(|token| {
            let key = parse_reveal_token(token.trim());
            if key.is_none() {
                tracing::debug!("dropping reveal token \"{}\"", token);
            }
            key
        })
        .collect()
}

fn parse_reveal_token(token: &str) -> Option<RevealKey> {
    if token.is_empty() {
        return None;
    }
    if token.bytes().all(|b| b.is_ascii_digit()) {
        return token.parse().ok().map(RevealKey::Index);
    }
    let signed_number = token
        .strip_prefix(|c: char| c == '-' || c == '+')
        .is_some_and(|rest| !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()));
    if signed_number {
        return None;
    }
    token
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
        .then(|| RevealKey::Id(token.to_string()))
}

#[cfg(test)]
#[path = "params_tests.rs"]
mod tests;
