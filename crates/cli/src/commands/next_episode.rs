// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, Duration, Utc};

use super::Context;
use crate::config::NextEpisode;
use crate::error::Result;

pub fn run(ctx: &Context) -> Result<()> {
    println!("{}", render(ctx.config.next_episode.as_ref(), Utc::now()));
    Ok(())
}

/// Countdown line for the configured episode as seen at `now`.
pub(crate) fn render(next: Option<&NextEpisode>, now: DateTime<Utc>) -> String {
    let Some(next) = next else {
        return "no upcoming episode".to_string();
    };
    let Some(remaining) = next.time_until(now) else {
        return "no upcoming episode".to_string();
    };
    let label = next.episode.as_deref().unwrap_or("next episode");
    format!("{} airs in {}", label, format_countdown(remaining))
}

/// Two most significant of days, hours and minutes.
pub(crate) fn format_countdown(remaining: Duration) -> String {
    let days = remaining.num_days();
    let hours = remaining.num_hours() % 24;
    let minutes = remaining.num_minutes() % 60;

    let parts: Vec<String> = [(days, "day"), (hours, "hour"), (minutes, "minute")]
        .into_iter()
        .skip_while(|(n, _)| *n == 0)
        .take(2)
        .filter(|(n, _)| *n > 0)
        .map(|(n, unit)| plural(n, unit))
        .collect();

    if parts.is_empty() {
        "less than a minute".to_string()
    } else {
        parts.join(" ")
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("{n} {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

#[cfg(test)]
#[path = "next_episode_tests.rs"]
mod tests;
