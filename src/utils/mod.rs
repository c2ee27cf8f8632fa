//! Calendar utility functions.
//!
//! # Available Utilities
//!
//! - [`datetime`] - Template formatting, parsing and calendar arithmetic
//! - [`relative`] - Human-readable "time ago" phrases
//!
//! All functions here are pure. The ones that depend on the current time
//! come in three flavours: one reading the system clock, one taking an
//! explicit reference instant (`*_at`), and one taking a
//! [`Clock`](crate::clock::Clock) (`*_with`).

pub mod datetime;
pub mod relative;
