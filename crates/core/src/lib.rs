// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! sl-core: Relative-event timeline library
//!
//! This crate provides the delta engine, the season/episode catalog, spoiler
//! filter parameter validation and the content schema used by the
//! spoilerline CLI and by anything rendering the timeline.

pub mod catalog;
pub mod content;
pub mod dataset;
pub mod delta;
pub mod error;
pub mod params;

pub use catalog::Catalog;
pub use content::{
    find_duplicate_ids, validate_event, validate_records, DuplicateId, Event, TagKey,
    ValidationReport, Violation,
};
pub use dataset::{read_records, Dataset, Source};
pub use delta::{
    describe_hours, diff_description, parse_delta, sort_by_delta, sort_refs_by_delta, Timelined,
    Unit,
};
pub use error::{Error, Result};
pub use params::{has_filter_params, parse_filter_params, FilterState, Layout, RawParams, RevealKey};
