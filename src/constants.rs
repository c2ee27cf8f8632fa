//! Constants used throughout the crate
//!
//! This module centralizes template tokens, unit lengths, phrases and other
//! constant values.

// Template tokens, in substitution order
pub const TOKEN_YEAR: &str = "YYYY";
pub const TOKEN_MONTH: &str = "MM";
pub const TOKEN_DAY: &str = "DD";
pub const TOKEN_HOUR: &str = "HH";
pub const TOKEN_MINUTE: &str = "mm";
pub const TOKEN_SECOND: &str = "ss";

/// All recognized template tokens
pub const TEMPLATE_TOKENS: [&str; 6] = [TOKEN_YEAR, TOKEN_MONTH, TOKEN_DAY, TOKEN_HOUR, TOKEN_MINUTE, TOKEN_SECOND];

/// Separator between the parts of a parseable date
pub const DATE_SEPARATOR: char = '-';

/// Default date template
pub const DEFAULT_DATE_TEMPLATE: &str = "YYYY-MM-DD";
/// Default time template
pub const DEFAULT_TIME_TEMPLATE: &str = "HH:mm:ss";

// Relative time unit lengths in seconds (calendar-naive)
pub const SECONDS_PER_MINUTE: i64 = 60;
pub const SECONDS_PER_HOUR: i64 = 3_600;
pub const SECONDS_PER_DAY: i64 = 86_400;
/// 30-day month
pub const SECONDS_PER_MONTH: i64 = 2_592_000;
/// 365-day year
pub const SECONDS_PER_YEAR: i64 = 31_536_000;

// Relative time phrases
pub const PHRASE_YESTERDAY: &str = "Yesterday";
pub const PHRASE_YEARS_AGO: &str = "years ago";
pub const PHRASE_MONTHS_AGO: &str = "months ago";
pub const PHRASE_DAYS_AGO: &str = "days ago";
pub const PHRASE_HOURS_AGO: &str = "hours ago";
pub const PHRASE_MINUTES_AGO: &str = "minutes ago";
pub const PHRASE_SECONDS_AGO: &str = "seconds ago";

// Files and directories
pub const APP_DIR_NAME: &str = "datekit";
pub const LOCAL_CONFIG_FILE: &str = "datekit.toml";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const LOG_FILE_NAME: &str = "datekit.log";

/// Accepted log levels for the `[logging]` section
pub const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
