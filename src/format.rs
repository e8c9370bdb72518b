//! Display helpers shared by the view units.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::model::MatchResult;

const LONG_DATE_FORMAT: &str = "%B %-d, %Y";
const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Format a probability as a percentage with one decimal, e.g. `0.857` -> `85.7%`.
pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", value * 100.0)
}

/// Format a backend date or date-time as a long-form calendar date,
/// e.g. `2024-05-01` -> `May 1, 2024`.
///
/// Unparsable input is returned unchanged.
pub fn format_date(value: &str) -> String {
    match parse_calendar_date(value) {
        Some(date) => date.format(LONG_DATE_FORMAT).to_string(),
        None => value.to_string(),
    }
}

/// Extract the calendar date from a `YYYY-MM-DD`, naive date-time or RFC 3339 string.
pub(crate) fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
        return Some(date);
    }
    if let Ok(date_time) = DateTime::parse_from_rfc3339(value) {
        return Some(date_time.date_naive());
    }
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|date_time| date_time.date())
}

/// CSS classes for a result badge.
pub fn result_color(result: MatchResult) -> &'static str {
    match result {
        MatchResult::Win => "text-green-600 bg-green-100",
        MatchResult::Draw => "text-yellow-600 bg-yellow-100",
        MatchResult::Loss => "text-red-600 bg-red-100",
    }
}

pub fn result_text(result: MatchResult) -> &'static str {
    match result {
        MatchResult::Win => "Win",
        MatchResult::Draw => "Draw",
        MatchResult::Loss => "Loss",
    }
}
