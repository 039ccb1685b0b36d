//! Line codec for record files.
//!
//! Every record is stored as one line in a fixed per-category template that
//! always ends with `DateTime: YYYY-MM-DD HH:MM:SS`. Decoding is anchored on
//! the literal separators; lines that don't match (hand edits, foreign
//! content) come back as `AppError::Parse` instead of aborting a read.

use crate::errors::{AppError, AppResult};
use crate::models::{Amount, Category, Entry, Record, WorkoutKind};
use crate::utils::date::{format_timestamp, parse_timestamp};
use regex::{Captures, Regex};
use std::str::FromStr;
use std::sync::LazyLock;

static WORKOUT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Workout: (\w+), Duration: (\d+) minutes, DateTime:\s*(.+?)\s*$")
        .expect("valid workout pattern")
});

// Non-greedy: the food item stops at the first ", Quantity: ".
static DIET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Food: (.*?), Quantity: (\d+) grams, DateTime:\s*(.+?)\s*$")
        .expect("valid diet pattern")
});

static HYDRATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Hydration: (\d*\.?\d+) liters, DateTime:\s*(.+?)\s*$")
        .expect("valid hydration pattern")
});

static WEIGHT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Weight: (\d*\.?\d+) kg, DateTime:\s*(.+?)\s*$").expect("valid weight pattern")
});

static SLEEP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Sleep: (\d+) minutes, DateTime:\s*(.+?)\s*$").expect("valid sleep pattern")
});

static STEPS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Steps: (\d+) steps, DateTime:\s*(.+?)\s*$").expect("valid steps pattern")
});

/// Serialize a record to its single-line form (no line terminator).
pub fn encode(record: &Record) -> String {
    let ts = format_timestamp(&record.timestamp);
    match &record.entry {
        Entry::Workout { kind, minutes } => format!(
            "Workout: {}, Duration: {} minutes, DateTime: {}",
            kind.as_str(),
            minutes,
            ts
        ),
        Entry::Diet { food, grams } => {
            format!("Food: {food}, Quantity: {grams} grams, DateTime: {ts}")
        }
        Entry::Hydration { liters } => format!("Hydration: {liters} liters, DateTime: {ts}"),
        Entry::Weight { kg } => format!("Weight: {kg} kg, DateTime: {ts}"),
        Entry::Sleep { minutes } => format!("Sleep: {minutes} minutes, DateTime: {ts}"),
        Entry::Steps { count } => format!("Steps: {count} steps, DateTime: {ts}"),
    }
}

/// Parse one line of a `category` record file.
pub fn decode(line: &str, category: Category) -> AppResult<Record> {
    decode_with_source(line, category).map(|(record, _)| record)
}

/// Like `decode`, also returning the timestamp text as written in the line,
/// without the surrounding whitespace.
pub fn decode_with_source(line: &str, category: Category) -> AppResult<(Record, &str)> {
    let parse_err = || AppError::Parse(line.trim_end().to_string());

    let (entry, caps, ts_idx) = match category {
        Category::Workout => {
            let caps = WORKOUT_RE.captures(line).ok_or_else(parse_err)?;
            let kind = WorkoutKind::from_stored(&caps[1]).ok_or_else(parse_err)?;
            let minutes = number(&caps, 2).ok_or_else(parse_err)?;
            (Entry::Workout { kind, minutes }, caps, 3)
        }
        Category::Diet => {
            let caps = DIET_RE.captures(line).ok_or_else(parse_err)?;
            let grams = number(&caps, 2).ok_or_else(parse_err)?;
            let food = caps[1].to_string();
            (Entry::Diet { food, grams }, caps, 3)
        }
        Category::Hydration => {
            let caps = HYDRATION_RE.captures(line).ok_or_else(parse_err)?;
            let liters = Amount::parse(&caps[1]).ok_or_else(parse_err)?;
            (Entry::Hydration { liters }, caps, 2)
        }
        Category::Weight => {
            let caps = WEIGHT_RE.captures(line).ok_or_else(parse_err)?;
            let kg = Amount::parse(&caps[1]).ok_or_else(parse_err)?;
            (Entry::Weight { kg }, caps, 2)
        }
        Category::Sleep => {
            let caps = SLEEP_RE.captures(line).ok_or_else(parse_err)?;
            let minutes = number(&caps, 1).ok_or_else(parse_err)?;
            (Entry::Sleep { minutes }, caps, 2)
        }
        Category::Steps => {
            let caps = STEPS_RE.captures(line).ok_or_else(parse_err)?;
            let count = number(&caps, 1).ok_or_else(parse_err)?;
            (Entry::Steps { count }, caps, 2)
        }
    };

    let source = caps.get(ts_idx).ok_or_else(parse_err)?.as_str();
    let ts = parse_timestamp(source).ok_or_else(parse_err)?;
    Ok((Record::new(entry, ts), source))
}

fn number<T: FromStr>(caps: &Captures<'_>, idx: usize) -> Option<T> {
    caps.get(idx)?.as_str().parse().ok()
}
