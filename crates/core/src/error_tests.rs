// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    invalid_field = {
        Error::InvalidField { field: "season", reason: "must be a positive integer".into() },
        "must be a positive integer"
    },
    not_allowed = {
        Error::NotAllowed { field: "layout", value: "table".into(), allowed: "list, grid".into() },
        "list, grid"
    },
    invalid_content = { Error::InvalidContent { count: 3 }, "3 problem(s)" },
)]
fn error_display_contains(err: Error, expected: &str) {
    assert!(err.to_string().contains(expected));
}

#[test]
fn error_not_allowed_display_names_value_and_field() {
    let err = Error::NotAllowed {
        field: "episode",
        value: "5".into(),
        allowed: "1, 2, 3".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("episode"));
    assert!(msg.contains("'5'"));
    assert!(msg.contains("hint"));
}

#[test]
fn error_field_attribution() {
    let err = Error::InvalidField {
        field: "season",
        reason: "x".into(),
    };
    assert_eq!(err.field(), Some("season"));
    assert_eq!(Error::InvalidContent { count: 1 }.field(), None);
}

#[test]
fn error_from_io() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn error_from_json() {
    let json_err = serde_json::from_str::<()>("invalid").unwrap_err();
    let err: Error = json_err.into();
    assert!(matches!(err, Error::Json(_)));
}
