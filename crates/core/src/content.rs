// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Timeline content records and their validation.
//!
//! Content files are JSON arrays of [`Event`] records. Validation never
//! stops at the first problem: every field of every record is checked and
//! all [`Violation`]s are returned together, along with any ids that occur
//! more than once.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::delta::Timelined;
use crate::error::{Error, Result};

/// Maximum summary length, in characters.
pub const MAX_SUMMARY_LENGTH: usize = 200;

static UUID_V4_RE: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"^[0-9a-f]{8}-[0-9a-f]{4}-4[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    }
});
static DELTA_RE: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(
        r"^-?[0-9]+\s+(days?|hours?|weeks?|months?|years?)(\s+[0-9]+\s+(days?|hours?|weeks?|months?|years?))*$",
    ) {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    }
});
static IMAGE_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"^/images/.+\.(jpg|jpeg|png|gif|webp)$") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });

/// A single timeline event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
pub struct Event {
    /// Lowercase UUID v4.
    pub id: String,
    /// Offset from the timeline's reference point, e.g. `3 days` or `1 week 2 days`.
    #[serde(default)]
    pub delta: Option<String>,
    /// One-line summary, 1 to 200 characters.
    pub summary: String,
    /// Full description, non-empty.
    pub description: String,
    /// Image paths under `/images/`.
    #[serde(default)]
    pub images: Vec<String>,
    /// `key:value` tags, e.g. `season:1` or `character:Alice`.
    pub tags: Vec<String>,
}

impl Event {
    /// Value of the first tag with the given key, trimmed.
    pub fn tag_value(&self, key: TagKey) -> Option<&str> {
        self.tags.iter().find_map(|tag| {
            let (k, v) = tag.split_once(':')?;
            let v = v.trim();
            (k == key.as_str() && !v.is_empty()).then_some(v)
        })
    }

    pub fn season(&self) -> Option<u32> {
        self.tag_value(TagKey::Season)?.parse().ok()
    }

    pub fn episode(&self) -> Option<u32> {
        self.tag_value(TagKey::Episode)?.parse().ok()
    }
}

impl Timelined for Event {
    fn delta(&self) -> Option<&str> {
        self.delta.as_deref()
    }
}

/// Allowed tag keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKey {
    Episode,
    Season,
    Character,
    Location,
    Theme,
    Time,
    Marker,
}

impl TagKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            TagKey::Episode => "episode",
            TagKey::Season => "season",
            TagKey::Character => "character",
            TagKey::Location => "location",
            TagKey::Theme => "theme",
            TagKey::Time => "time",
            TagKey::Marker => "marker",
        }
    }

    pub fn valid_names() -> &'static str {
        "episode, season, character, location, theme, time, marker"
    }

    /// Whether values for this key must be integers.
    fn is_numeric(&self) -> bool {
        matches!(self, TagKey::Episode | TagKey::Season)
    }
}

impl fmt::Display for TagKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TagKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "episode" => Ok(TagKey::Episode),
            "season" => Ok(TagKey::Season),
            "character" => Ok(TagKey::Character),
            "location" => Ok(TagKey::Location),
            "theme" => Ok(TagKey::Theme),
            "time" => Ok(TagKey::Time),
            "marker" => Ok(TagKey::Marker),
            _ => Err(Error::NotAllowed {
                field: "tag",
                value: s.to_string(),
                allowed: TagKey::valid_names().to_string(),
            }),
        }
    }
}

/// A single schema violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// Index of the offending record within the validated collection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<usize>,
    /// Field path within the record, e.g. `images[0]`. Empty when the
    /// record as a whole is malformed.
    pub path: String,
    pub message: String,
}

impl Violation {
    fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Violation {
            record: None,
            path: path.into(),
            message: message.into(),
        }
    }

    fn in_record(self, index: usize) -> Self {
        Violation {
            record: Some(index),
            ..self
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.record, self.path.is_empty()) {
            (Some(index), true) => write!(f, "[{index}]: {}", self.message),
            (Some(index), false) => write!(f, "[{index}].{}: {}", self.path, self.message),
            (None, _) => write!(f, "{}: {}", self.path, self.message),
        }
    }
}

/// An id shared by more than one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateId {
    pub id: String,
    /// Indices of every record carrying the id, ascending.
    pub indices: Vec<usize>,
}

/// Outcome of validating a collection of raw records.
#[derive(Debug, Default)]
pub struct ValidationReport {
    /// Decoded records aligned with the input; `None` where decoding failed.
    pub records: Vec<Option<Event>>,
    pub violations: Vec<Violation>,
    pub duplicates: Vec<DuplicateId>,
}

impl ValidationReport {
    pub fn is_ok(&self) -> bool {
        self.violations.is_empty() && self.duplicates.is_empty()
    }

    /// Total number of reported problems.
    pub fn problem_count(&self) -> usize {
        self.violations.len() + self.duplicates.len()
    }

    /// Decoded events, dropping records that failed to decode.
    pub fn into_events(self) -> Vec<Event> {
        self.records.into_iter().flatten().collect()
    }
}

/// Check every field of an event, returning all violations.
pub fn validate_event(event: &Event) -> Vec<Violation> {
    let mut violations = Vec::new();

    if !UUID_V4_RE.is_match(&event.id) {
        violations.push(Violation::new("id", "must be a valid UUID v4"));
    }

    if let Some(delta) = &event.delta {
        if !DELTA_RE.is_match(delta) {
            violations.push(Violation::new("delta", "invalid delta format"));
        }
    }

    let summary_len = event.summary.chars().count();
    if summary_len == 0 {
        violations.push(Violation::new("summary", "must not be empty"));
    } else if summary_len > MAX_SUMMARY_LENGTH {
        violations.push(Violation::new(
            "summary",
            format!("must be {MAX_SUMMARY_LENGTH} characters or less ({summary_len} chars)"),
        ));
    }

    if event.description.is_empty() {
        violations.push(Violation::new("description", "must not be empty"));
    }

    for (i, image) in event.images.iter().enumerate() {
        if !IMAGE_PATH_RE.is_match(image) {
            violations.push(Violation::new(format!("images[{i}]"), "invalid image path"));
        }
    }

    for (i, tag) in event.tags.iter().enumerate() {
        if let Err(message) = check_tag(tag) {
            violations.push(Violation::new(format!("tags[{i}]"), message));
        }
    }

    violations
}

fn check_tag(tag: &str) -> std::result::Result<(), String> {
    let Some((key, value)) = tag.split_once(':') else {
        return Err("invalid tag format: expected key:value".to_string());
    };
    let key: TagKey = key
        .parse()
        .map_err(|_| format!("unknown tag key '{key}'; valid keys: {}", TagKey::valid_names()))?;
    let value = value.trim();
    if value.is_empty() {
        return Err(format!("{key} tag has no value"));
    }
    if key.is_numeric() && value.parse::<u32>().is_err() {
        return Err(format!("{key} tag value must be a number, got '{value}'"));
    }
    Ok(())
}

/// Find every id that occurs more than once, in first-occurrence order.
pub fn find_duplicate_ids(events: &[Event]) -> Vec<DuplicateId> {
    duplicates_of(events.iter().map(|e| e.id.as_str()).enumerate())
}

fn duplicates_of<'a>(ids: impl Iterator<Item = (usize, &'a str)>) -> Vec<DuplicateId> {
    let mut first_seen: Vec<&str> = Vec::new();
    let mut positions: HashMap<&str, Vec<usize>> = HashMap::new();
    for (index, id) in ids {
        let entry = positions.entry(id).or_default();
        if entry.is_empty() {
            first_seen.push(id);
        }
        entry.push(index);
    }

    first_seen
        .into_iter()
        .filter_map(|id| {
            let indices = positions.remove(id)?;
            (indices.len() > 1).then(|| DuplicateId {
                id: id.to_string(),
                indices,
            })
        })
        .collect()
}

/// Decode and validate raw JSON records as a single collection.
///
/// Records that fail to decode are reported at their index and take no
/// part in duplicate detection.
pub fn validate_records(records: &[serde_json::Value]) -> ValidationReport {
    let mut report = ValidationReport::default();

    for (index, value) in records.iter().enumerate() {
        match Event::deserialize(value) {
            Ok(event) => {
                report
                    .violations
                    .extend(validate_event(&event).into_iter().map(|v| v.in_record(index)));
                report.records.push(Some(event));
            }
            Err(e) => {
                report
                    .violations
                    .push(Violation::new("", e.to_string()).in_record(index));
                report.records.push(None);
            }
        }
    }

    report.duplicates = duplicates_of(
        report
            .records
            .iter()
            .enumerate()
            .filter_map(|(i, r)| r.as_ref().map(|e| (i, e.id.as_str()))),
    );
    report
}

#[cfg(test)]
#[path = "content_tests.rs"]
mod tests;
