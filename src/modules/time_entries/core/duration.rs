//! Free-form duration input, normalised to whole minutes.
//!
//! Formats are tried in a fixed order and the first match wins:
//!
//! 1. decimal hours, with a decimal point or a trailing `h`: `2.5`, `2.5h`, `2h`
//! 2. hours and minutes: `2h 30m`, `2h30m`, `2h 30`
//! 3. hours only: `2h`
//! 4. minutes with a unit word: `90m`, `90 min`, `90 minutes`
//! 5. colon form: `1:30` (the minutes part is not range checked, `1:99` is 159)
//! 6. plain integer minutes: `150`
//!
//! Input is trimmed and lowercased first. Anything else is rejected.

use serde::{Deserialize, Serialize};

const MINUTES_PER_HOUR: u32 = 60;

pub fn parse_duration(text: &str) -> Option<u32> {
    let input = text.trim().to_lowercase();
    if input.is_empty() {
        return None;
    }

    decimal_hours(&input)
        .or_else(|| hours_and_minutes(&input))
        .or_else(|| hours_only(&input))
        .or_else(|| minutes_with_unit(&input))
        .or_else(|| colon_time(&input))
        .or_else(|| whole_number(&input))
}

pub fn format_duration(minutes: u32) -> String {
    let hours = minutes / MINUTES_PER_HOUR;
    let rest = minutes % MINUTES_PER_HOUR;
    match (hours, rest) {
        (0, 0) => "0h".to_string(),
        (h, 0) => format!("{h}h"),
        (0, m) => format!("{m}m"),
        (h, m) => format!("{h}h {m}m"),
    }
}

/// Hours with exactly two decimals, for dashboards and reports.
pub fn format_decimal_hours(minutes: u64) -> String {
    format!("{:.2}", minutes as f64 / f64::from(MINUTES_PER_HOUR))
}

/// A duration as it arrives over the wire: either minutes already, or text
/// the user typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DurationInput {
    Minutes(u32),
    Text(String),
}

impl DurationInput {
    pub fn to_minutes(&self) -> Option<u32> {
        match self {
            DurationInput::Minutes(minutes) => Some(*minutes),
            DurationInput::Text(text) => parse_duration(text),
        }
    }
}

fn whole_number(input: &str) -> Option<u32> {
    if !all_digits(input) {
        return None;
    }
    input.parse().ok()
}

fn all_digits(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit())
}

fn hours_to_minutes(hours: u32, minutes: u32) -> Option<u32> {
    hours.checked_mul(MINUTES_PER_HOUR)?.checked_add(minutes)
}

fn decimal_hours(input: &str) -> Option<u32> {
    let (body, has_unit) = match input.strip_suffix('h') {
        Some(body) => (body, true),
        None => (input, false),
    };
    let (whole, fraction) = match body.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (body, None),
    };
    if !has_unit && fraction.is_none() {
        return None;
    }
    if !all_digits(whole) || !fraction.is_none_or(all_digits) {
        return None;
    }
    let hours: f64 = body.parse().ok()?;
    let minutes = (hours * f64::from(MINUTES_PER_HOUR)).round();
    if minutes > f64::from(u32::MAX) {
        return None;
    }
    Some(minutes as u32)
}

fn hours_and_minutes(input: &str) -> Option<u32> {
    let (hours, rest) = input.split_once('h')?;
    let rest = rest.trim_start();
    let minutes = rest.strip_suffix('m').unwrap_or(rest);
    hours_to_minutes(whole_number(hours)?, whole_number(minutes)?)
}

fn hours_only(input: &str) -> Option<u32> {
    hours_to_minutes(whole_number(input.strip_suffix('h')?)?, 0)
}

fn minutes_with_unit(input: &str) -> Option<u32> {
    let split = input.find(|c: char| !c.is_ascii_digit())?;
    let (number, unit) = input.split_at(split);
    match unit.trim_start() {
        "m" | "min" | "minutes" => whole_number(number),
        _ => None,
    }
}

fn colon_time(input: &str) -> Option<u32> {
    let (hours, minutes) = input.split_once(':')?;
    hours_to_minutes(whole_number(hours)?, whole_number(minutes)?)
}
