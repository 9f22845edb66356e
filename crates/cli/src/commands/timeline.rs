// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Timeline command implementation.
//!
//! Sorts events by delta, applies the spoiler filter and prints the result
//! as a list, a grid, or JSON.

use std::fmt::Write;
use std::path::PathBuf;

use sl_core::{
    describe_hours, has_filter_params, parse_delta, parse_filter_params, sort_refs_by_delta, Event,
    FilterState, Layout, Timelined,
};

use super::Context;
use crate::cli::{FilterArgs, OutputFormat};
use crate::error::Result;
use crate::schema::timeline::{TimelineEntryJson, TimelineOutputJson};

const GRID_COLUMNS: usize = 3;
const GRID_CELL_WIDTH: usize = 28;

/// Run the timeline command.
pub fn run(
    ctx: &Context,
    filter: &FilterArgs,
    files: &[PathBuf],
    output: OutputFormat,
) -> Result<()> {
    let dataset = ctx.load_dataset(files)?;
    let raw = filter.to_raw_params();
    let state = parse_filter_params(&raw, dataset.catalog())?;
    let timeline = build(dataset.events(), state, has_filter_params(&raw));

    match output {
        OutputFormat::Text => print!("{}", render_text(&timeline)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&timeline)?),
    }
    Ok(())
}

/// Sort and filter events into timeline entries.
pub(crate) fn build(events: &[Event], filter: FilterState, filtered: bool) -> TimelineOutputJson {
    let mut entries = Vec::with_capacity(events.len());
    let mut previous_hours: Option<i64> = None;

    for (position, event) in sort_refs_by_delta(events).into_iter().enumerate() {
        let hours = parse_delta(event.delta());
        let since_previous = previous_hours
            .zip(hours)
            .and_then(|(prev, cur)| cur.checked_sub(prev))
            .map(describe_hours);
        if hours.is_some() {
            previous_hours = hours;
        }

        let (season, episode) = (event.season(), event.episode());
        let hidden =
            filter.is_spoiler(season, episode) && !filter.is_revealed(position, &event.id);

        entries.push(TimelineEntryJson {
            position,
            id: event.id.clone(),
            delta: event.delta.clone(),
            season,
            episode,
            hidden,
            summary: (!hidden).then(|| event.summary.clone()),
            description: (!hidden).then(|| event.description.clone()),
            images: if hidden { Vec::new() } else { event.images.clone() },
            since_previous,
        });
    }

    TimelineOutputJson {
        filtered,
        filter,
        entries,
    }
}

pub(crate) fn render_text(timeline: &TimelineOutputJson) -> String {
    let mut out = String::new();
    if let Some(header) = header(timeline) {
        let _ = writeln!(out, "{header}\n");
    }
    if timeline.entries.is_empty() {
        out.push_str("no events\n");
        return out;
    }
    match timeline.filter.layout {
        Layout::List => render_list(&mut out, &timeline.entries),
        Layout::Grid => render_grid(&mut out, &timeline.entries),
    }
    out
}

fn header(timeline: &TimelineOutputJson) -> Option<String> {
    if !timeline.filtered {
        return None;
    }
    let filter = &timeline.filter;
    let text = match (filter.show_all, filter.season, filter.episode) {
        (true, _, _) => "Spoiler filter: off (showing everything)".to_string(),
        (false, Some(season), Some(episode)) => {
            format!("Spoiler filter: through season {season}, episode {episode}")
        }
        (false, Some(season), None) => format!("Spoiler filter: through season {season}"),
        (false, None, _) => "Spoiler filter: no watched point set".to_string(),
    };
    Some(text)
}

fn episode_label(entry: &TimelineEntryJson) -> String {
    match (entry.season, entry.episode) {
        (Some(s), Some(e)) => format!("S{s}E{e}"),
        (Some(s), None) => format!("S{s}"),
        _ => "-".to_string(),
    }
}

fn hidden_text(entry: &TimelineEntryJson) -> String {
    format!("[spoiler hidden - reveal with --reveal {}]", entry.position)
}

fn render_list(out: &mut String, entries: &[TimelineEntryJson]) {
    for entry in entries {
        let summary = match &entry.summary {
            Some(summary) => summary.clone(),
            None => hidden_text(entry),
        };
        let delta = entry.delta.as_deref().unwrap_or("?");
        let _ = write!(
            out,
            "{:>3}  {:<8} {:<16} {}",
            entry.position,
            episode_label(entry),
            delta,
            summary
        );
        if let Some(since) = &entry.since_previous {
            let _ = write!(out, "  ({since})");
        }
        out.push('\n');
    }
}

fn render_grid(out: &mut String, entries: &[TimelineEntryJson]) {
    for row in entries.chunks(GRID_COLUMNS) {
        let titles: Vec<String> = row
            .iter()
            .map(|e| cell(&format!("#{} {}", e.position, episode_label(e))))
            .collect();
        let bodies: Vec<String> = row
            .iter()
            .map(|e| match &e.summary {
                Some(summary) => cell(summary),
                None => cell("[spoiler hidden]"),
            })
            .collect();
        let _ = writeln!(out, "{}", titles.join(" | ").trim_end());
        let _ = writeln!(out, "{}", bodies.join(" | ").trim_end());
        out.push('\n');
    }
}

/// Pad or truncate to the grid cell width, in characters.
fn cell(text: &str) -> String {
    let count = text.chars().count();
    if count <= GRID_CELL_WIDTH {
        format!("{:<width$}", text, width = GRID_CELL_WIDTH)
    } else {
        let truncated: String = text.chars().take(GRID_CELL_WIDTH - 3).collect();
        format!("{truncated}...")
    }
}

#[cfg(test)]
#[path = "timeline_tests.rs"]
mod tests;
