use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::interceptors::AppError;

// Hour 0-23 (single digit allowed), minute always two digits.
static WAIT_TIME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-1]?[0-9]|2[0-3]):([0-5][0-9])$").expect("valid pattern"));

/// A wait-time string that passed validation.
///
/// The store persists exactly what the operator typed: "9:05" and "09:05" are
/// both accepted and kept as-is, no canonicalization. Constructing a
/// `WaitTime` is the only way to hand a wait time to the queue store, so a
/// persisted value has always been through `parse`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitTime(String);

impl WaitTime {
    /// Validate a user-supplied `hh:mm` duration. Pure, no I/O.
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        if WAIT_TIME_PATTERN.is_match(raw) {
            Ok(Self(raw.to_owned()))
        } else {
            Err(AppError::ValidationError(format!(
                "Invalid wait time {:?}, expected hh:mm between 0:00 and 23:59",
                raw
            )))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WaitTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_times_unchanged() {
        for raw in ["0:00", "9:05", "09:05", "12:30", "19:59", "23:59", "00:30"] {
            let wait = WaitTime::parse(raw).unwrap();
            assert_eq!(wait.as_str(), raw, "{raw} must come back unchanged");
        }
    }

    #[test]
    fn single_and_double_digit_hours_are_distinct_values() {
        assert_ne!(
            WaitTime::parse("9:05").unwrap(),
            WaitTime::parse("09:05").unwrap()
        );
    }

    #[test]
    fn rejects_out_of_range_and_malformed_input() {
        for raw in [
            "24:00", "25:00", "99:99", "12:60", "9:5", ":30", "12:", "12", "abc", "", " 9:05",
            "9:05 ", "9h05", "-1:00",
        ] {
            assert!(WaitTime::parse(raw).is_err(), "{raw:?} must be rejected");
        }
    }

    #[test]
    fn rejection_is_a_validation_error() {
        let err = WaitTime::parse("99:99").unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }
}
