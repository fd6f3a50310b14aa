//! Calendar helpers shared by the generator and service layers.

use chrono::NaiveDate;

use crate::error::InputError;

/// Parses a strict `YYYY-MM-DD` date string.
///
/// # Errors
///
/// Returns [`InputError::InvalidDate`] for anything else; the core never
/// guesses at other formats.
pub fn parse_date(value: &str) -> Result<NaiveDate, InputError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| InputError::InvalidDate(value.to_string()))
}

/// Number of days in the given month.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, InputError> {
    if !(1..=12).contains(&month) {
        return Err(InputError::InvalidMonth(month));
    }

    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or(InputError::InvalidYear(year))?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or(InputError::InvalidYear(year))?;

    Ok(next.signed_duration_since(first).num_days() as u32)
}
