//! Pre-submit checks mirroring the form's native `required`, `pattern` and
//! `maxlength` constraints.
//!
//! The browser enforces these before the submit handler ever runs; this
//! module repeats them so the submit path cannot dispatch a record the page
//! would have rejected.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::record::{Field, RegistrationRecord};

/// Longest value the birth-date input accepts (`maxlength`).
pub const BIRTH_DATE_MAX_LEN: usize = 10;

/// Why a record is not ready to submit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("required field `{}` is empty", .0.key())]
    Missing(Field),
    #[error("birth date `{0}` is not in dd/mm/yyyy form")]
    BirthDatePattern(String),
}

/// Check a record against the form constraints.
///
/// Fields are checked in render order and the first failure is reported,
/// the same field the browser would focus.
///
/// # Errors
///
/// Returns [`ValidationError::Missing`] for the first empty required field,
/// or [`ValidationError::BirthDatePattern`] when the birth date is filled in
/// but not a complete `dd/mm/yyyy` value.
pub fn validate(record: &RegistrationRecord) -> Result<(), ValidationError> {
    for field in Field::ALL {
        let value = record.get(field);
        // Native `required` only rejects the empty string.
        if value.is_empty() {
            return Err(ValidationError::Missing(field));
        }
        if field == Field::BirthDate && !is_full_birth_date(value) {
            return Err(ValidationError::BirthDatePattern(value.to_owned()));
        }
    }
    Ok(())
}

/// Whether `value` matches `\d{2}/\d{2}/\d{4}` in full and fits `maxlength`.
#[must_use]
pub fn is_full_birth_date(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() != BIRTH_DATE_MAX_LEN {
        return false;
    }
    bytes.iter().enumerate().all(|(i, b)| match i {
        2 | 5 => *b == b'/',
        _ => b.is_ascii_digit(),
    })
}
