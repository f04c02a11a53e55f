//! Form and query input parsing helpers.
//!
//! Empty strings are treated as absent values throughout. Malformed
//! non-empty numeric or date input is rejected with a 400-mapped
//! `AppError::BadRequest`; malformed time input silently falls back to
//! absent, matching the lenient time handling of the forms.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::AppError;

/// Parses an HTML date input value (`YYYY-MM-DD`).
///
/// # Arguments
/// - `value` - The raw form/query string
///
/// # Returns
/// - `Ok(Some(NaiveDate))` - Successfully parsed date
/// - `Ok(None)` - Input was empty
/// - `Err(AppError::BadRequest)` - Non-empty input not matching `YYYY-MM-DD`
pub fn parse_date(value: &str) -> Result<Option<NaiveDate>, AppError> {
    if value.is_empty() {
        return Ok(None);
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| AppError::BadRequest(format!("Invalid date '{}', expected YYYY-MM-DD", value)))
}

/// Parses a time input value, accepting both `HH:MM` and `HH:MM:SS`.
///
/// Unparseable input yields `None` rather than an error.
///
/// # Arguments
/// - `value` - The raw form string
///
/// # Returns
/// - `Some(NaiveTime)` - Successfully parsed time
/// - `None` - Input was empty or matched neither format
pub fn parse_time(value: &str) -> Option<NaiveTime> {
    if value.is_empty() {
        return None;
    }

    for fmt in ["%H:%M", "%H:%M:%S"] {
        if let Ok(time) = NaiveTime::parse_from_str(value, fmt) {
            return Some(time);
        }
    }

    None
}

/// Returns true iff the combined date and time is strictly before local now.
///
/// An incomplete combination (either part absent) is never considered past.
///
/// # Arguments
/// - `date` - Parsed meeting date, if any
/// - `time` - Parsed meeting start time, if any
pub fn is_past(date: Option<NaiveDate>, time: Option<NaiveTime>) -> bool {
    match (date, time) {
        (Some(date), Some(time)) => {
            NaiveDateTime::new(date, time) < Local::now().naive_local()
        }
        _ => false,
    }
}

/// Parses an invited/accepted count field, defaulting to 0 and clamping to ≥ 0.
///
/// # Arguments
/// - `value` - The raw form string, if submitted
///
/// # Returns
/// - `Ok(i32)` - Parsed count, never negative
/// - `Err(AppError::BadRequest)` - Non-empty input that is not an integer
pub fn parse_count(value: Option<&str>) -> Result<i32, AppError> {
    Ok(parse_int_or_zero(value)?.max(0))
}

/// Parses a duration field, defaulting to 0. Not clamped.
///
/// # Arguments
/// - `value` - The raw form string, if submitted
///
/// # Returns
/// - `Ok(i32)` - Parsed duration in minutes
/// - `Err(AppError::BadRequest)` - Non-empty input that is not an integer
pub fn parse_duration(value: Option<&str>) -> Result<i32, AppError> {
    parse_int_or_zero(value)
}

/// Parses a required id field (club_id/room_id).
///
/// # Arguments
/// - `value` - The raw form string, if submitted
/// - `field` - Field name used in the error message
///
/// # Returns
/// - `Ok(i32)` - Parsed id
/// - `Err(AppError::BadRequest)` - Absent, empty, or non-numeric input
pub fn parse_id(value: Option<&str>, field: &str) -> Result<i32, AppError> {
    match value {
        Some(v) if !v.is_empty() => v
            .parse::<i32>()
            .map_err(|_| AppError::BadRequest(format!("Invalid {} '{}'", field, v))),
        _ => Err(AppError::BadRequest(format!("Missing {}", field))),
    }
}

/// Parses an optional id field (report filters).
///
/// # Arguments
/// - `value` - The raw query string, if submitted
/// - `field` - Field name used in the error message
///
/// # Returns
/// - `Ok(Some(i32))` - Parsed id
/// - `Ok(None)` - Absent or empty input
/// - `Err(AppError::BadRequest)` - Non-empty, non-numeric input
pub fn parse_optional_id(value: Option<&str>, field: &str) -> Result<Option<i32>, AppError> {
    match value {
        Some(v) if !v.is_empty() => parse_id(Some(v), field).map(Some),
        _ => Ok(None),
    }
}

fn parse_int_or_zero(value: Option<&str>) -> Result<i32, AppError> {
    match value {
        Some(v) if !v.is_empty() => v
            .parse::<i32>()
            .map_err(|_| AppError::BadRequest(format!("Invalid number '{}'", v))),
        _ => Ok(0),
    }
}
