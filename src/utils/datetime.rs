//! Date and time utility functions
//!
//! This module provides template formatting, simple parsing and calendar
//! arithmetic on local wall-clock instants.

use crate::clock::{Clock, SystemClock};
use crate::constants::{
    DATE_SEPARATOR, TOKEN_DAY, TOKEN_HOUR, TOKEN_MINUTE, TOKEN_MONTH, TOKEN_SECOND, TOKEN_YEAR,
};
use crate::error::DateError;
use crate::utils::relative;
use crate::Instant;
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};

/// chrono format of a plain `YYYY-MM-DD` date
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Format an instant by substituting template tokens
///
/// The first occurrence of each of `YYYY`, `MM`, `DD`, `HH`, `mm` and `ss` is
/// replaced, in that order, with the zero-padded field. Later occurrences and
/// any other text are left untouched.
///
/// # Arguments
/// * `instant` - The instant to format
/// * `template` - Template such as `"YYYY-MM-DD HH:mm"`
///
/// # Returns
/// * `String` - The template with tokens substituted
pub fn format_date(instant: Instant, template: &str) -> String {
    let fields = [
        (TOKEN_YEAR, format!("{:04}", instant.year())),
        (TOKEN_MONTH, format!("{:02}", instant.month())),
        (TOKEN_DAY, format!("{:02}", instant.day())),
        (TOKEN_HOUR, format!("{:02}", instant.hour())),
        (TOKEN_MINUTE, format!("{:02}", instant.minute())),
        (TOKEN_SECOND, format!("{:02}", instant.second())),
    ];

    fields
        .iter()
        .fold(template.to_string(), |acc, (token, value)| acc.replacen(token, value, 1))
}

/// Parse a date string in YYYY-MM-DD form to an instant at local midnight
///
/// The text must split on `-` into exactly three integers. Months and days
/// outside their usual range roll over, so `2023-02-29` is March 1st and
/// `2024-13-01` is January 1st 2025.
///
/// # Arguments
/// * `text` - Date string such as `"2024-03-05"`
///
/// # Returns
/// * `Result<Instant, DateError>` - Parsed instant or the reason it failed
pub fn parse_date(text: &str) -> Result<Instant, DateError> {
    let parts: Vec<&str> = text.split(DATE_SEPARATOR).collect();
    let [year, month, day] = parts.as_slice() else {
        log::debug!("parse_date: '{}' has {} parts", text, parts.len());
        return Err(DateError::InvalidFormat(text.to_string()));
    };

    let year: i64 = parse_component("year", year)?;
    let month: i64 = parse_component("month", month)?;
    let day: i64 = parse_component("day", day)?;

    from_rolled_ymd(year, month, day)
        .map(|date| date.and_time(NaiveTime::MIN))
        .ok_or_else(|| DateError::OutOfRange(text.to_string()))
}

/// Build a date from fields that may overflow their range
///
/// The month folds into the year, then the day counts from the first of
/// that month. `None` only when the result is outside chrono's range.
fn from_rolled_ymd(year: i64, month: i64, day: i64) -> Option<NaiveDate> {
    let total = year.checked_mul(12)?.checked_add(month.checked_sub(1)?)?;
    let year = i32::try_from(total.div_euclid(12)).ok()?;
    let month = u32::try_from(total.rem_euclid(12) + 1).ok()?;

    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    first.checked_add_signed(TimeDelta::try_days(day.checked_sub(1)?)?)
}

fn parse_component<T: std::str::FromStr>(part: &'static str, value: &str) -> Result<T, DateError> {
    value.parse().map_err(|_| DateError::InvalidComponent {
        part,
        value: value.to_string(),
    })
}

/// Parse either a full `YYYY-MM-DD HH:MM:SS` timestamp or a plain date
///
/// Tries, in order: space-separated datetime, `T`-separated datetime, and
/// finally [`parse_date`].
pub fn parse_date_time(text: &str) -> Result<Instant, DateError> {
    let text = text.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(text, &format!("{} %H:%M:%S", ISO_DATE_FORMAT)) {
        return Ok(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(text, &format!("{}T%H:%M:%S", ISO_DATE_FORMAT)) {
        return Ok(dt);
    }
    parse_date(text)
}

/// Add (or subtract, when negative) whole days, keeping the time of day
///
/// # Returns
/// * `Result<Instant, DateError>` - The shifted instant, or `OutOfRange` when
///   it falls outside the representable calendar
pub fn add_days(instant: Instant, days: i64) -> Result<Instant, DateError> {
    TimeDelta::try_days(days)
        .and_then(|delta| instant.checked_add_signed(delta))
        .ok_or_else(|| DateError::OutOfRange(format!("{} {:+} days", instant, days)))
}

/// Whether `instant` falls on today's local date
pub fn is_today(instant: Instant) -> bool {
    is_today_with(instant, &SystemClock)
}

/// Whether `instant` falls on the same calendar date as `now`
pub fn is_today_at(instant: Instant, now: Instant) -> bool {
    instant.date() == now.date()
}

/// Whether `instant` falls on the current date of `clock`
pub fn is_today_with(instant: Instant, clock: &dyn Clock) -> bool {
    is_today_at(instant, clock.now())
}

/// 1-based day of the year (1..=366)
pub fn day_of_year(instant: Instant) -> u32 {
    instant.ordinal()
}

/// Approximate week number of the year
///
/// Computed as `ceil((day_of_year + weekday_of_jan1 + 1) / 7)` where the
/// weekday counts from Sunday = 0. This is not ISO-8601 week numbering.
pub fn week_number(instant: Instant) -> u32 {
    let day = day_of_year(instant);
    let jan1_weekday = weekday_of_jan1(instant);
    (day + jan1_weekday + 1).div_ceil(7)
}

/// Weekday of January 1st of the instant's year, Sunday = 0
fn weekday_of_jan1(instant: Instant) -> u32 {
    let weekday = instant.weekday().num_days_from_sunday();
    let days_since_jan1 = (day_of_year(instant) - 1) % 7;
    (weekday + 7 - days_since_jan1) % 7
}

/// Number of days in the 1-based `month` of `year`
///
/// Months outside 1..=12 roll over into neighbouring years, so `0` is
/// December of the previous year and `13` is January of the next.
pub fn days_in_month(month: u32, year: i32) -> u32 {
    let total = i64::from(year) * 12 + i64::from(month) - 1;
    let year = total.div_euclid(12);
    let month = total.rem_euclid(12) + 1;

    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Summary of an instant, as printed by `datekit info`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateInfo {
    pub formatted: String,
    pub day_of_year: u32,
    pub week_number: u32,
    pub days_in_month: u32,
    pub is_today: bool,
    pub relative: String,
}

/// Collect every derived value for `instant` relative to `now`
pub fn describe(instant: Instant, template: &str, now: Instant) -> DateInfo {
    DateInfo {
        formatted: format_date(instant, template),
        day_of_year: day_of_year(instant),
        week_number: week_number(instant),
        days_in_month: days_in_month(instant.month(), instant.year()),
        is_today: is_today_at(instant, now),
        relative: relative::time_ago_at(instant, now),
    }
}
