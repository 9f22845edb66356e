// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration management.
//!
//! Configuration is stored in `spoilerline.toml` and includes:
//! - `content.files`: content files loaded when none are given on the command line
//! - `next_episode`: air date and label of the next scheduled episode
//!
//! Every section is optional, and a missing file means defaults.

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub const CONFIG_FILE_NAME: &str = "spoilerline.toml";

/// Project configuration stored in `spoilerline.toml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub content: ContentConfig,
    /// Next scheduled episode (optional - no countdown if absent).
    #[serde(default)]
    pub next_episode: Option<NextEpisode>,
}

/// Content file locations.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ContentConfig {
    /// Season files, merged in order. Relative paths resolve against the
    /// directory holding `spoilerline.toml`.
    #[serde(default)]
    pub files: Vec<PathBuf>,
}

/// The next upcoming episode.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct NextEpisode {
    /// Air time in RFC 3339 (UTC). Absent when nothing is scheduled.
    #[serde(default)]
    pub air_date: Option<DateTime<Utc>>,
    /// Display label, e.g. `S1E5`.
    #[serde(default)]
    pub episode: Option<String>,
}

impl NextEpisode {
    /// Time remaining until air, if the air date is still in the future.
    pub fn time_until(&self, now: DateTime<Utc>) -> Option<Duration> {
        let air_date = self.air_date?;
        (air_date > now).then(|| air_date - now)
    }
}

impl Config {
    /// Loads configuration from `dir`, falling back to defaults when the
    /// file does not exist.
    pub fn load(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        if !config_path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(&config_path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        Ok(config)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
