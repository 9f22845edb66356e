// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use serde_json::json;
use tempfile::TempDir;

fn record(id: &str, season: u32, episode: u32) -> Value {
    json!({
        "id": id,
        "delta": "1 day",
        "summary": "summary",
        "description": "description",
        "tags": [format!("season:{season}"), format!("episode:{episode}")]
    })
}

fn write(dir: &TempDir, name: &str, value: &Value) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    path
}

const ID_1: &str = "11111111-1111-4111-8111-111111111111";
const ID_2: &str = "22222222-2222-4222-9222-222222222222";
const ID_3: &str = "33333333-3333-4333-a333-333333333333";

#[test]
fn read_records_accepts_array_and_wrapped_object() {
    let dir = TempDir::new().unwrap();
    let array = write(&dir, "a.json", &json!([record(ID_1, 1, 1)]));
    let wrapped = write(&dir, "b.json", &json!({ "events": [record(ID_2, 1, 2)] }));

    assert_eq!(read_records(&array).unwrap().len(), 1);
    assert_eq!(read_records(&wrapped).unwrap().len(), 1);
}

#[test]
fn read_records_rejects_other_layouts() {
    let dir = TempDir::new().unwrap();
    let scalar = write(&dir, "a.json", &json!(42));
    let object = write(&dir, "b.json", &json!({ "scenes": [] }));

    assert!(matches!(read_records(&scalar), Err(Error::ContentLayout { .. })));
    assert!(matches!(read_records(&object), Err(Error::ContentLayout { .. })));
}

#[test]
fn read_records_reports_malformed_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, "[{").unwrap();
    assert!(matches!(read_records(&path), Err(Error::Json(_))));
}

#[test]
fn read_records_missing_file() {
    let err = read_records(Path::new("/nonexistent/season-9.json")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn load_merges_files_in_order() {
    let dir = TempDir::new().unwrap();
    let s1 = write(&dir, "season-1.json", &json!([record(ID_1, 1, 1), record(ID_2, 1, 2)]));
    let s2 = write(&dir, "season-2.json", &json!([record(ID_3, 2, 1)]));

    let dataset = Dataset::load(&[&s1, &s2]).unwrap();
    let ids: Vec<&str> = dataset.events().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec![ID_1, ID_2, ID_3]);
    assert_eq!(dataset.catalog().seasons().collect::<Vec<_>>(), vec![1, 2]);
}

#[test]
fn load_rejects_cross_file_duplicates() {
    let dir = TempDir::new().unwrap();
    let s1 = write(&dir, "season-1.json", &json!([record(ID_1, 1, 1)]));
    let s2 = write(&dir, "season-2.json", &json!([record(ID_1, 2, 1)]));

    let err = Dataset::load(&[&s1, &s2]).unwrap_err();
    assert!(matches!(err, Error::InvalidContent { count: 1 }));
}

#[test]
fn validate_maps_indices_to_sources() {
    let dir = TempDir::new().unwrap();
    let s1 = write(&dir, "season-1.json", &json!([record(ID_1, 1, 1)]));
    let s2 = write(&dir, "season-2.json", &json!([record(ID_2, 2, 1), record(ID_1, 2, 2)]));

    let (report, sources) = Dataset::validate(&[&s1, &s2]).unwrap();
    assert_eq!(report.duplicates.len(), 1);
    let locations: Vec<String> = report.duplicates[0]
        .indices
        .iter()
        .map(|&i| sources[i].to_string())
        .collect();
    assert_eq!(
        locations,
        vec![
            format!("{}[0]", s1.display()),
            format!("{}[1]", s2.display())
        ]
    );
}
