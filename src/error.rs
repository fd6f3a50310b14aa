//! Input validation errors for the service core.
//!
//! Generation itself cannot fail once its inputs are validated, so every
//! variant here surfaces before any random draw happens. Callers that
//! work through [`anyhow`] can downcast to [`InputError`] to tell a bad
//! request apart from an internal fault.

use std::fmt;

/// Errors for caller-supplied dates and calendar coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Date string not in `YYYY-MM-DD` form.
    InvalidDate(String),
    /// Month outside `1..=12`.
    InvalidMonth(u32),
    /// Year that does not form a representable calendar date.
    InvalidYear(i32),
    /// Unrecognized chart granularity name.
    InvalidFilter(String),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDate(value) => write!(f, "invalid date '{value}', expected YYYY-MM-DD"),
            Self::InvalidMonth(month) => write!(f, "invalid month {month}, expected 1-12"),
            Self::InvalidYear(year) => write!(f, "invalid year {year}"),
            Self::InvalidFilter(value) => {
                write!(f, "invalid filter '{value}', expected hourly, weekly, or daily")
            }
        }
    }
}

impl std::error::Error for InputError {}
