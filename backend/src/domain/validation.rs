//! Field validation shared by the request drafts.
//!
//! Drafts are deserialised from strongly typed request bodies, so type
//! mismatches are already rejected by serde. The checks here cover the
//! remaining content rules and always fail with
//! [`ErrorCode::ValidationError`](crate::domain::ErrorCode::ValidationError).

use chrono::{DateTime, NaiveDate};

use crate::domain::Error;

/// Content validation for request drafts.
pub trait Validate {
    /// Check the draft, returning the first rule it breaks.
    ///
    /// # Errors
    /// Returns a validation [`Error`] naming the offending field.
    fn validate(&self) -> Result<(), Error>;
}

/// Newtype wrapper for request field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldName(&'static str);

impl FieldName {
    /// Wrap a camelCase field name as it appears in the JSON body.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// The wrapped name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

/// Reject blank required text.
pub fn require_text(field: FieldName, value: &str) -> Result<(), Error> {
    if value.trim().is_empty() {
        return Err(Error::validation(format!(
            "{} must not be empty",
            field.as_str()
        )));
    }
    Ok(())
}

/// Reject optional text that is present but blank.
pub fn optional_text(field: FieldName, value: Option<&str>) -> Result<(), Error> {
    value.map_or(Ok(()), |text| require_text(field, text))
}

/// Reject optional e-mail addresses without a local part and a domain.
pub fn optional_email(field: FieldName, value: Option<&str>) -> Result<(), Error> {
    let Some(email) = value else {
        return Ok(());
    };
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => Ok(()),
        _ => Err(Error::validation(format!(
            "{} must be a valid e-mail address",
            field.as_str()
        ))),
    }
}

/// Reject negative or non-finite amounts.
pub fn non_negative_amount(field: FieldName, value: f64) -> Result<(), Error> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::validation(format!(
            "{} must be a non-negative number",
            field.as_str()
        )));
    }
    Ok(())
}

/// Reject counts below one.
pub fn positive_count(field: FieldName, value: i64) -> Result<(), Error> {
    if value < 1 {
        return Err(Error::validation(format!(
            "{} must be at least 1",
            field.as_str()
        )));
    }
    Ok(())
}

/// Reject optional counts below zero.
pub fn optional_non_negative_count(field: FieldName, value: Option<i64>) -> Result<(), Error> {
    match value {
        Some(count) if count < 0 => Err(Error::validation(format!(
            "{} must not be negative",
            field.as_str()
        ))),
        _ => Ok(()),
    }
}

/// Reject optional fractions outside `0..=1`.
pub fn optional_fraction(field: FieldName, value: Option<f64>) -> Result<(), Error> {
    match value {
        Some(fraction) if !(0.0..=1.0).contains(&fraction) => Err(Error::validation(format!(
            "{} must be between 0 and 1",
            field.as_str()
        ))),
        _ => Ok(()),
    }
}

/// Accept RFC 3339 timestamps or `YYYY-MM-DD` calendar dates.
pub fn calendar_date(field: FieldName, value: &str) -> Result<(), Error> {
    let parsed = DateTime::parse_from_rfc3339(value).is_ok()
        || NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok();
    if parsed {
        Ok(())
    } else {
        Err(Error::validation(format!(
            "{} must be an RFC 3339 timestamp or a YYYY-MM-DD date",
            field.as_str()
        )))
    }
}

/// Reject identifiers that cannot name a database row.
pub fn reference_id(field: FieldName, value: i64) -> Result<(), Error> {
    if value < 1 {
        return Err(Error::validation(format!(
            "{} must be a positive identifier",
            field.as_str()
        )));
    }
    Ok(())
}
