//! Field-level validation shared by the dialog forms.
//!
//! Each helper checks one field kind and reports a user-facing message
//! built from the field's display label. Validation failures are the only
//! recognized error kind in this system; they are shown inline by the
//! dialog and never escape it.

use chrono::NaiveDate;
use thiserror::Error;

/// Calendar format accepted by the appointment date field.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A user-input validation failure for a single field.
///
/// `Display` renders the exact message shown inline in the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("{0} must be a number")]
    NotANumber(&'static str),
    #[error("{0} must be in YYYY-MM-DD format")]
    BadDate(&'static str),
}

/// Trims a required field, rejecting empty or whitespace-only input.
pub fn require(
    label: &'static str,
    value: &str,
) -> Result<String, FieldError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(FieldError::Required(label))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Parses an age field into a positive integer.
///
/// Empty, non-numeric, and zero input all fail with the same
/// "must be a number" message.
pub fn parse_age(
    label: &'static str,
    value: &str,
) -> Result<u32, FieldError> {
    match value.trim().parse::<u32>() {
        Ok(age) if age > 0 => Ok(age),
        _ => Err(FieldError::NotANumber(label)),
    }
}

/// Strictly parses a `YYYY-MM-DD` date.
///
/// Alternate separators (`2024/01/01`) and impossible calendar dates
/// (`2024-02-30`) both fail.
pub fn parse_date(
    label: &'static str,
    value: &str,
) -> Result<NaiveDate, FieldError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|e| {
        tracing::debug!(input = %value, "date rejected: {e}");
        FieldError::BadDate(label)
    })
}

/// Normalizes an optional field: trimmed, `None` when left blank.
pub fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
