// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn schema_content_describes_events() {
    let json = serde_json::to_string_pretty(&schema(SchemaCommand::Content)).unwrap();

    assert!(json.contains("\"$schema\""));
    assert!(json.contains("\"Event\""));
    assert!(json.contains("\"summary\""));
    assert!(json.contains("\"tags\""));
}

#[test]
fn schema_content_has_required_fields() {
    let value = serde_json::to_value(schema(SchemaCommand::Content)).unwrap();
    let required = value["definitions"]["Event"]["required"].as_array().unwrap();
    let required: Vec<&str> = required.iter().filter_map(|v| v.as_str()).collect();

    // delta and images have defaults
    assert!(required.contains(&"id"));
    assert!(required.contains(&"tags"));
    assert!(!required.contains(&"delta"));
    assert!(!required.contains(&"images"));
}

#[test]
fn schema_timeline_includes_filter_state() {
    let json = serde_json::to_string(&schema(SchemaCommand::Timeline)).unwrap();

    assert!(json.contains("\"TimelineOutputJson\""));
    assert!(json.contains("\"FilterState\""));
    assert!(json.contains("\"TimelineEntryJson\""));
}

#[test]
fn schema_catalog_produces_valid_json() {
    let json = serde_json::to_string_pretty(&schema(SchemaCommand::Catalog)).unwrap();

    assert!(json.contains("\"CatalogOutputJson\""));
    assert!(json.contains("\"all_episodes\""));
}
