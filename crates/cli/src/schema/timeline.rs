// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use schemars::JsonSchema;
use serde::Serialize;
use sl_core::FilterState;

/// JSON output of `timeline -o json`.
#[derive(Debug, JsonSchema, Serialize)]
pub struct TimelineOutputJson {
    /// Whether filter controls were given (season or showAll present).
    pub filtered: bool,
    /// The validated filter state.
    pub filter: FilterState,
    /// Timeline entries in chronological order.
    pub entries: Vec<TimelineEntryJson>,
}

/// A single timeline entry. Content fields are omitted for hidden entries.
#[derive(Debug, JsonSchema, Serialize)]
pub struct TimelineEntryJson {
    /// Position in the sorted timeline; usable with `--reveal`.
    pub position: usize,
    pub id: String,
    pub delta: Option<String>,
    pub season: Option<u32>,
    pub episode: Option<u32>,
    /// True when the entry is past the watched point and not revealed.
    pub hidden: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    /// Time since the previous entry with a known delta, e.g. `2 days later`.
    pub since_previous: Option<String>,
}
