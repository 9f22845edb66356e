// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[derive(Debug, Clone, PartialEq)]
struct Scene {
    delta: Option<&'static str>,
    idx: usize,
}

impl Timelined for Scene {
    fn delta(&self) -> Option<&str> {
        self.delta
    }
}

fn scene(delta: Option<&'static str>, idx: usize) -> Scene {
    Scene { delta, idx }
}

fn indices(scenes: &[Scene]) -> Vec<usize> {
    scenes.iter().map(|s| s.idx).collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Units
// ─────────────────────────────────────────────────────────────────────────────

#[parameterized(
    hour = { "hour", Unit::Hour },
    hours = { "hours", Unit::Hour },
    day_upper = { "DAY", Unit::Day },
    weeks_mixed = { "Weeks", Unit::Week },
    month = { "month", Unit::Month },
    years = { "years", Unit::Year },
)]
fn unit_from_str_valid(input: &str, expected: Unit) {
    assert_eq!(input.parse::<Unit>().unwrap(), expected);
}

#[parameterized(
    empty = { "" },
    minute = { "minute" },
    abbreviated = { "d" },
)]
fn unit_from_str_invalid(input: &str) {
    assert!(input.parse::<Unit>().is_err());
}

#[test]
fn unit_hour_table() {
    let hours: Vec<i64> = Unit::ALL.iter().map(Unit::hours).collect();
    assert_eq!(hours, vec![1, 24, 168, 720, 8760]);
}

// ─────────────────────────────────────────────────────────────────────────────
// parse_delta
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn parse_delta_single_term_for_every_unit() {
    for unit in Unit::ALL {
        for n in [0i64, 1, 7, 42, -3] {
            for word in [unit.singular(), unit.plural()] {
                let expr = format!("{n} {word}");
                assert_eq!(parse_delta(Some(&expr)), Some(n * unit.hours()), "{expr}");
            }
        }
    }
}

#[parameterized(
    week_and_days = { "1 week 2 days", 168 + 48 },
    days_and_hours = { "2 days 3 hours", 51 },
    negative_first = { "-1 day 6 hours", -18 },
    mixed_case = { "1 YEAR 1 Month", 8760 + 720 },
    extra_whitespace = { "  3   hours  ", 3 },
    explicit_plus = { "+2 weeks", 336 },
)]
fn parse_delta_compound(input: &str, expected: i64) {
    assert_eq!(parse_delta(Some(input)), Some(expected));
}

#[parameterized(
    glued_term = { "1 week2 days", 48 },
    separator_words = { "1 week and 2 days", 216 },
    trailing_text = { "3 days later", 72 },
)]
fn parse_delta_skips_unrecognized_text(input: &str, expected: i64) {
    assert_eq!(parse_delta(Some(input)), Some(expected));
}

#[test]
fn parse_delta_absent_is_absent() {
    assert_eq!(parse_delta(None), None);
}

#[parameterized(
    empty = { "" },
    no_unit = { "5" },
    no_number = { "days" },
    no_space = { "5days" },
    unknown_unit = { "5 minutes" },
    trailing_letters = { "5 dayss" },
)]
fn parse_delta_unparseable_is_absent(input: &str) {
    assert_eq!(parse_delta(Some(input)), None);
}

#[test]
fn parse_delta_overflow_is_absent() {
    assert_eq!(parse_delta(Some("99999999999999999999 hours")), None);
    assert_eq!(parse_delta(Some("9223372036854775807 years")), None);
}

// ─────────────────────────────────────────────────────────────────────────────
// diff_description
// ─────────────────────────────────────────────────────────────────────────────

#[parameterized(
    same = { "3 hours", "3 hours", "same time" },
    same_other_units = { "1 day", "24 hours", "same time" },
    one_hour = { "0 hours", "1 hour", "1 hour later" },
    hours_earlier = { "5 hours", "0 hours", "5 hours earlier" },
    escalates_to_day = { "0 hours", "25 hours", "1 day later" },
    escalates_to_day_earlier = { "25 hours", "0 hours", "1 day earlier" },
    days_floor = { "0 hours", "6 days 23 hours", "6 days later" },
    one_week = { "0 days", "7 days", "1 week later" },
    weeks = { "0 days", "29 days", "4 weeks later" },
    one_month = { "0 days", "30 days", "1 month later" },
    months = { "0 days", "364 days", "12 months later" },
    one_year = { "0 days", "365 days", "1 year later" },
    years_earlier = { "3 years", "1 year", "2 years earlier" },
    across_zero = { "-2 days", "1 day", "3 days later" },
)]
fn diff_description_cases(from: &str, to: &str, expected: &str) {
    assert_eq!(diff_description(Some(from), Some(to)).as_deref(), Some(expected));
}

#[parameterized(
    from_missing = { None, Some("1 day") },
    to_missing = { Some("1 day"), None },
    from_garbage = { Some("soon"), Some("1 day") },
    to_garbage = { Some("1 day"), Some("later") },
)]
fn diff_description_absent(from: Option<&str>, to: Option<&str>) {
    assert_eq!(diff_description(from, to), None);
}

// ─────────────────────────────────────────────────────────────────────────────
// sort_by_delta
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn sort_by_delta_orders_known_deltas() {
    let scenes = vec![
        scene(Some("3 days"), 0),
        scene(Some("1 hour"), 1),
        scene(Some("1 week"), 2),
        scene(Some("-2 days"), 3),
    ];
    assert_eq!(indices(&sort_by_delta(scenes)), vec![3, 1, 0, 2]);
}

#[test]
fn sort_by_delta_is_stable_for_equal_deltas() {
    let scenes = vec![
        scene(Some("1 day"), 0),
        scene(Some("24 hours"), 1),
        scene(Some("0 hours"), 2),
        scene(Some("1 day"), 3),
    ];
    assert_eq!(indices(&sort_by_delta(scenes)), vec![2, 0, 1, 3]);
}

#[test]
fn sort_by_delta_keeps_absent_items_in_place() {
    let scenes = vec![scene(None, 0), scene(Some("1 day"), 1), scene(None, 2)];
    assert_eq!(indices(&sort_by_delta(scenes)), vec![0, 1, 2]);
}

#[test]
fn sort_by_delta_never_moves_unknown_timing() {
    let scenes = vec![
        scene(Some("5 days"), 0),
        scene(None, 1),
        scene(Some("1 day"), 2),
        scene(Some("garbage"), 3),
        scene(Some("2 days"), 4),
    ];
    let sorted = sort_by_delta(scenes);
    assert_eq!(indices(&sorted), vec![2, 1, 4, 3, 0]);
}

#[test]
fn sort_by_delta_all_absent_is_identity() {
    let scenes: Vec<Scene> = (0..4).map(|i| scene(None, i)).collect();
    assert_eq!(indices(&sort_by_delta(scenes)), vec![0, 1, 2, 3]);
}

#[test]
fn sort_by_delta_empty() {
    assert!(sort_by_delta(Vec::<Scene>::new()).is_empty());
}

#[test]
fn sort_refs_matches_owned_sort() {
    let scenes = vec![
        scene(Some("2 weeks"), 0),
        scene(None, 1),
        scene(Some("1 week"), 2),
    ];
    let by_ref: Vec<usize> = sort_refs_by_delta(&scenes).iter().map(|s| s.idx).collect();
    assert_eq!(by_ref, indices(&sort_by_delta(scenes.clone())));
    assert_eq!(indices(&scenes), vec![0, 1, 2]);
}
