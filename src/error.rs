//! Error types for date parsing.

/// Errors produced when turning text into an [`Instant`](crate::Instant).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("Invalid date format '{0}': expected YYYY-MM-DD")]
    InvalidFormat(String),

    #[error("Invalid {part} '{value}': not an integer")]
    InvalidComponent { part: &'static str, value: String },

    #[error("Date out of range: {0}")]
    OutOfRange(String),

    #[error("Invalid reference time '{0}'")]
    InvalidReference(String),
}
