// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Relative time expressions ("deltas").
//!
//! A delta places an event relative to a reference point, e.g. `5 days`,
//! `-3 hours` or `1 week 2 days`. All terms are summed into a canonical
//! number of hours using fixed approximations for weeks, months and years.
//!
//! Parsing is fail-soft: an unparseable delta is logged and treated as
//! unknown, never as an error.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

static TERM_RE: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"(?i)([-+]?[0-9]+)\s+(hours?|days?|weeks?|months?|years?)\b") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    }
});

/// Unit of a delta term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unit {
    Hour,
    Day,
    Week,
    Month,
    Year,
}

impl Unit {
    /// All units, smallest first.
    pub const ALL: [Unit; 5] = [Unit::Hour, Unit::Day, Unit::Week, Unit::Month, Unit::Year];

    /// Number of hours in one unit.
    pub fn hours(&self) -> i64 {
        match self {
            Unit::Hour => 1,
            Unit::Day => 24,
            Unit::Week => 24 * 7,
            Unit::Month => 24 * 30,
            Unit::Year => 24 * 365,
        }
    }

    pub fn singular(&self) -> &'static str {
        match self {
            Unit::Hour => "hour",
            Unit::Day => "day",
            Unit::Week => "week",
            Unit::Month => "month",
            Unit::Year => "year",
        }
    }

    pub fn plural(&self) -> &'static str {
        match self {
            Unit::Hour => "hours",
            Unit::Day => "days",
            Unit::Week => "weeks",
            Unit::Month => "months",
            Unit::Year => "years",
        }
    }

    /// Unit word agreeing with `count`.
    pub fn word_for(&self, count: i64) -> &'static str {
        if count == 1 {
            self.singular()
        } else {
            self.plural()
        }
    }

    /// Largest unit in which `abs_hours` is at least one whole unit.
    fn for_span(abs_hours: i64) -> Unit {
        if abs_hours < Unit::Day.hours() {
            Unit::Hour
        } else if abs_hours < Unit::Week.hours() {
            Unit::Day
        } else if abs_hours < Unit::Month.hours() {
            Unit::Week
        } else if abs_hours < Unit::Year.hours() {
            Unit::Month
        } else {
            Unit::Year
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.singular())
    }
}

impl FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "hour" | "hours" => Ok(Unit::Hour),
            "day" | "days" => Ok(Unit::Day),
            "week" | "weeks" => Ok(Unit::Week),
            "month" | "months" => Ok(Unit::Month),
            "year" | "years" => Ok(Unit::Year),
            _ => Err(Error::InvalidField {
                field: "delta",
                reason: format!("unknown unit '{s}'; valid units: hour, day, week, month, year"),
            }),
        }
    }
}

/// Anything placed on the timeline by an optional delta expression.
pub trait Timelined {
    fn delta(&self) -> Option<&str>;
}

impl<T: Timelined + ?Sized> Timelined for &T {
    fn delta(&self) -> Option<&str> {
        (**self).delta()
    }
}

/// Parse a delta expression into total hours.
///
/// Every `<integer> <unit>` term in the string is summed, so
/// `"1 week 2 days"` is 216 hours. Returns `None` for a missing delta, and
/// logs a warning before returning `None` if nothing in the string parses.
/// Text between terms that is not a term itself (including a term glued to
/// the next number, as in `"1 week2 days"`) is skipped with a warning.
pub fn parse_delta(expr: Option<&str>) -> Option<i64> {
    let expr = expr?;

    let mut total: i64 = 0;
    let mut matched = false;
    let mut skipped = false;
    let mut last_end = 0;
    for caps in TERM_RE.captures_iter(expr) {
        matched = true;
        if let Some(m) = caps.get(0) {
            skipped |= !expr[last_end..m.start()].trim().is_empty();
            last_end = m.end();
        }
        let term = caps[1]
            .parse::<i64>()
            .ok()
            .zip(caps[2].parse::<Unit>().ok())
            .and_then(|(value, unit)| value.checked_mul(unit.hours()))
            .and_then(|hours| total.checked_add(hours));
        match term {
            Some(sum) => total = sum,
            None => {
                tracing::warn!("delta out of range: \"{}\"", expr);
                return None;
            }
        }
    }

    if !matched {
        tracing::warn!("unable to parse delta: \"{}\"", expr);
        return None;
    }
    if skipped || !expr[last_end..].trim().is_empty() {
        tracing::warn!("ignoring unrecognized text in delta: \"{}\"", expr);
    }
    Some(total)
}

/// Describe the time from one delta to another, e.g. `"5 days later"`.
///
/// Returns `None` if either side is missing or unparseable, and
/// `"same time"` when both resolve to the same hour.
pub fn diff_description(from: Option<&str>, to: Option<&str>) -> Option<String> {
    let from_hours = parse_delta(from)?;
    let to_hours = parse_delta(to)?;
    Some(describe_hours(to_hours.checked_sub(from_hours)?))
}

/// Render a signed hour difference in its largest whole unit.
pub fn describe_hours(diff: i64) -> String {
    if diff == 0 {
        return "same time".to_string();
    }

    let abs = diff.unsigned_abs().min(i64::MAX as u64) as i64;
    let direction = if diff > 0 { "later" } else { "earlier" };
    let unit = Unit::for_span(abs);
    let count = abs / unit.hours();
    format!("{count} {} {direction}", unit.word_for(count))
}

/// Stable chronological sort by delta.
///
/// Items with a resolvable delta are ordered by ascending hours, earlier
/// input position breaking ties. Items without one stay at their input
/// position; nothing is inferred about when they happen.
pub fn sort_by_delta<T: Timelined>(items: Vec<T>) -> Vec<T> {
    let order = delta_order(&items);
    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
    order
        .into_iter()
        .filter_map(|i| slots.get_mut(i).and_then(Option::take))
        .collect()
}

/// Borrowing form of [`sort_by_delta`].
pub fn sort_refs_by_delta<T: Timelined>(items: &[T]) -> Vec<&T> {
    delta_order(items)
        .into_iter()
        .filter_map(|i| items.get(i))
        .collect()
}

/// Output position → input index.
fn delta_order<T: Timelined>(items: &[T]) -> Vec<usize> {
    let hours: Vec<Option<i64>> = items.iter().map(|item| parse_delta(item.delta())).collect();

    let mut resolved: Vec<(i64, usize)> = hours
        .iter()
        .enumerate()
        .filter_map(|(i, h)| h.map(|h| (h, i)))
        .collect();
    resolved.sort_by_key(|&(h, _)| h);
    let mut resolved = resolved.into_iter().map(|(_, i)| i);

    hours
        .iter()
        .enumerate()
        .map(|(i, h)| match h {
            Some(_) => resolved.next().unwrap_or(i),
            None => i,
        })
        .collect()
}

#[cfg(test)]
#[path = "delta_tests.rs"]
mod tests;
