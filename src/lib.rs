//! Datekit - small calendar utilities
//!
//! This library provides template-based date formatting, simple date parsing,
//! day arithmetic, day-of-year and week numbers, month lengths, and
//! human-readable relative times ("3 hours ago").
//!
//! # Modules
//!
//! * [`utils`] - The calendar functions themselves
//! * [`clock`] - Injectable "current time" sources
//! * [`config`] - Configuration file handling for the `datekit` binary
//! * [`logger`] - Logging setup and in-memory log buffer
//! * [`error`] - Error types

/// Command-line interface definitions
pub mod cli;

/// Sources of the current time
pub mod clock;

/// Configuration module for managing application settings
pub mod config;

/// Constants shared across modules
pub mod constants;

/// Error types for date parsing
pub mod error;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Date/time utility functions
pub mod utils;

/// A point in local calendar time.
pub type Instant = chrono::NaiveDateTime;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::DateError;
pub use utils::datetime::{
    add_days, day_of_year, days_in_month, describe, format_date, is_today, is_today_at, is_today_with, parse_date,
    week_number, DateInfo,
};
pub use utils::relative::{time_ago, time_ago_at, time_ago_with};
