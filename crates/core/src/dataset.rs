// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Loading timeline content from one or more JSON files.
//!
//! Each file holds either an array of events or an object with an `events`
//! array. Files are merged in the order given into one collection, so ids
//! must be unique across files.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::catalog::Catalog;
use crate::content::{validate_records, Event, ValidationReport};
use crate::error::{Error, Result};

/// Where a record came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub file: PathBuf,
    /// Position within that file.
    pub index: usize,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", self.file.display(), self.index)
    }
}

/// Read the raw event records of a single content file.
pub fn read_records(path: &Path) -> Result<Vec<Value>> {
    let text = fs::read_to_string(path)?;
    match serde_json::from_str::<Value>(&text)? {
        Value::Array(records) => Ok(records),
        Value::Object(mut map) => match map.remove("events") {
            Some(Value::Array(records)) => Ok(records),
            _ => Err(Error::ContentLayout {
                path: path.display().to_string(),
                reason: "object has no \"events\" array".to_string(),
            }),
        },
        _ => Err(Error::ContentLayout {
            path: path.display().to_string(),
            reason: "expected an array of events".to_string(),
        }),
    }
}

/// A validated, merged event collection and its derived catalog.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    events: Vec<Event>,
    catalog: Catalog,
}

impl Dataset {
    /// Read and validate every file as one collection without failing on
    /// content problems. Report indices refer to the merged collection;
    /// the returned sources map them back to files.
    ///
    /// # Errors
    ///
    /// Fails only if a file cannot be read or is not a JSON event list.
    pub fn validate<P: AsRef<Path>>(paths: &[P]) -> Result<(ValidationReport, Vec<Source>)> {
        let mut records = Vec::new();
        let mut sources = Vec::new();
        for path in paths {
            let path = path.as_ref();
            let file_records = read_records(path)?;
            tracing::debug!("read {} records from {}", file_records.len(), path.display());
            sources.extend((0..file_records.len()).map(|index| Source {
                file: path.to_path_buf(),
                index,
            }));
            records.extend(file_records);
        }
        Ok((validate_records(&records), sources))
    }

    /// Load and validate content files.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidContent`] if any record violates the schema
    /// or any id is duplicated.
    pub fn load<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let (report, sources) = Self::validate(paths)?;
        if !report.is_ok() {
            let locate = |i: usize| {
                sources
                    .get(i)
                    .map_or_else(|| format!("[{i}]"), Source::to_string)
            };
            for violation in &report.violations {
                match (violation.record.map(locate), violation.path.is_empty()) {
                    (Some(at), false) => {
                        tracing::warn!("{at}.{}: {}", violation.path, violation.message)
                    }
                    (Some(at), true) => tracing::warn!("{at}: {}", violation.message),
                    (None, _) => tracing::warn!("{}", violation),
                }
            }
            for duplicate in &report.duplicates {
                let locations: Vec<String> = duplicate.indices.iter().map(|&i| locate(i)).collect();
                tracing::warn!("duplicate id {} at {}", duplicate.id, locations.join(", "));
            }
            return Err(Error::InvalidContent {
                count: report.problem_count(),
            });
        }
        let events = report.into_events();
        Ok(Dataset {
            catalog: Catalog::from_events(&events),
            events,
        })
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

}

#[cfg(test)]
#[path = "dataset_tests.rs"]
mod tests;
