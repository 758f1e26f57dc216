//! Live `dd/mm/yyyy` display mask for the birth-date input.

#[cfg(test)]
#[path = "mask_test.rs"]
mod mask_test;

/// Maximum number of digits a full date carries.
const MAX_DIGITS: usize = 8;

/// Reformat a raw keystroke value as a partial `dd/mm/yyyy` date.
///
/// Non-digits are dropped first, then slashes are inserted after the day and
/// month groups. Digits past the eighth are discarded.
#[must_use]
pub fn mask_birth_date(raw: &str) -> String {
    let digits: String = raw
        .chars()
        .filter(char::is_ascii_digit)
        .take(MAX_DIGITS)
        .collect();

    // ASCII digits only, so byte slicing is char-aligned.
    match digits.len() {
        0..=2 => digits,
        3..=4 => format!("{}/{}", &digits[..2], &digits[2..]),
        _ => format!("{}/{}/{}", &digits[..2], &digits[2..4], &digits[4..]),
    }
}
