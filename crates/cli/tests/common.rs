// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::{json, Value};

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub fn spoilerline() -> Command {
    cargo_bin_cmd!("spoilerline")
}

/// A valid event with sequential id `n`.
pub fn event(n: u32, delta: Option<&str>, season: u32, episode: u32) -> Value {
    json!({
        "id": format!("{n:08}-0000-4000-8000-000000000000"),
        "delta": delta,
        "summary": format!("Event {n}"),
        "description": format!("What happened in event {n}."),
        "images": [format!("/images/event-{n}.png")],
        "tags": [format!("season:{season}"), format!("episode:{episode}")],
    })
}

/// Write `events` as a JSON array to `name` inside `temp`.
pub fn write_events(temp: &TempDir, name: &str, events: &[Value]) -> PathBuf {
    let path = temp.path().join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, serde_json::to_string_pretty(events).unwrap()).unwrap();
    path
}

pub fn write_config(temp: &TempDir, content: &str) {
    std::fs::write(temp.path().join("spoilerline.toml"), content).unwrap();
}

/// Two seasons with a well-known ordering:
/// sorted by delta the summaries read 3, 1, 2, 4, 5.
pub fn sample_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    write_events(
        &temp,
        "season-1.json",
        &[
            event(1, Some("1 day"), 1, 1),
            event(2, Some("3 days"), 1, 2),
            event(3, Some("0 hours"), 1, 1),
        ],
    );
    write_events(
        &temp,
        "season-2.json",
        &[
            event(4, Some("2 weeks"), 2, 1),
            event(5, Some("1 month"), 2, 2),
        ],
    );
    write_config(
        &temp,
        "[content]\nfiles = [\"season-1.json\", \"season-2.json\"]\n",
    );
    temp
}

pub fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).unwrap()
}
