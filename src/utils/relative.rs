//! Relative "time ago" phrases.

use crate::clock::{Clock, SystemClock};
use crate::constants::{
    PHRASE_DAYS_AGO, PHRASE_HOURS_AGO, PHRASE_MINUTES_AGO, PHRASE_MONTHS_AGO, PHRASE_SECONDS_AGO, PHRASE_YEARS_AGO,
    PHRASE_YESTERDAY, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE, SECONDS_PER_MONTH, SECONDS_PER_YEAR,
};
use crate::Instant;

/// Describe how long ago `instant` was, relative to the system clock
pub fn time_ago(instant: Instant) -> String {
    time_ago_with(instant, &SystemClock)
}

/// Describe how long ago `instant` was, relative to `clock`
pub fn time_ago_with(instant: Instant, clock: &dyn Clock) -> String {
    time_ago_at(instant, clock.now())
}

/// Describe how long ago `instant` was, relative to `now`
///
/// Buckets are checked from the largest unit down and the first match wins.
/// Years are 365 days and months 30 days. An instant after `now` lands in
/// the seconds bucket with a negative count.
///
/// # Examples
/// * 90 seconds → `"1 minutes ago"`
/// * exactly one day → `"Yesterday"`
/// * two days → `"2 days ago"`
pub fn time_ago_at(instant: Instant, now: Instant) -> String {
    let seconds = (now - instant).num_seconds();

    let phrase = match seconds {
        s if s >= SECONDS_PER_YEAR => format!("{} {}", s / SECONDS_PER_YEAR, PHRASE_YEARS_AGO),
        s if s >= SECONDS_PER_MONTH => format!("{} {}", s / SECONDS_PER_MONTH, PHRASE_MONTHS_AGO),
        s if s >= SECONDS_PER_DAY => match s / SECONDS_PER_DAY {
            1 => PHRASE_YESTERDAY.to_string(),
            days => format!("{} {}", days, PHRASE_DAYS_AGO),
        },
        s if s >= SECONDS_PER_HOUR => format!("{} {}", s / SECONDS_PER_HOUR, PHRASE_HOURS_AGO),
        s if s >= SECONDS_PER_MINUTE => format!("{} {}", s / SECONDS_PER_MINUTE, PHRASE_MINUTES_AGO),
        s => format!("{} {}", s, PHRASE_SECONDS_AGO),
    };

    log::trace!("time_ago: {}s -> {}", seconds, phrase);
    phrase
}
