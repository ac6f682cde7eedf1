//! Calendar month and year value objects for fee periods.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A calendar month, 1 (January) through 12 (December).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Month(chrono::Month);

impl Month {
    /// Creates a month from its number, returning error if outside 1-12.
    pub fn new(number: u32) -> Result<Self, ValidationError> {
        u8::try_from(number)
            .ok()
            .and_then(|n| chrono::Month::try_from(n).ok())
            .map(Self)
            .ok_or_else(|| ValidationError::out_of_range("month", 1, 12, i64::from(number)))
    }

    /// Returns the month number (1-12).
    pub fn number(&self) -> u32 {
        self.0.number_from_month()
    }

    /// Returns the English month name, e.g. "February".
    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    /// Returns the following month; December wraps to January.
    pub fn succ(&self) -> Self {
        Self(self.0.succ())
    }

    /// Returns the preceding month; January wraps to December.
    pub fn pred(&self) -> Self {
        Self(self.0.pred())
    }
}

impl From<chrono::Month> for Month {
    fn from(month: chrono::Month) -> Self {
        Self(month)
    }
}

impl TryFrom<u32> for Month {
    type Error = ValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u32 {
    fn from(month: Month) -> Self {
        month.number()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Earliest year accepted for fee periods.
pub const MIN_YEAR: i32 = 1;

/// Latest year accepted for fee periods.
pub const MAX_YEAR: i32 = 9999;

/// A calendar year with four or fewer digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Year(i32);

impl Year {
    /// Creates a year, returning error if outside 1-9999.
    pub fn new(value: i32) -> Result<Self, ValidationError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&value) {
            return Err(ValidationError::out_of_range(
                "year",
                i64::from(MIN_YEAR),
                i64::from(MAX_YEAR),
                i64::from(value),
            ));
        }
        Ok(Self(value))
    }

    /// Returns the year number.
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for Year {
    type Error = ValidationError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for i32 {
    fn from(year: Year) -> Self {
        year.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_accepts_valid_numbers() {
        assert_eq!(Month::new(1).unwrap().name(), "January");
        assert_eq!(Month::new(2).unwrap().name(), "February");
        assert_eq!(Month::new(12).unwrap().number(), 12);
    }

    #[test]
    fn month_rejects_out_of_range() {
        assert_eq!(
            Month::new(0),
            Err(ValidationError::out_of_range("month", 1, 12, 0))
        );
        assert!(Month::new(13).is_err());
        assert!(Month::new(300).is_err());
    }

    #[test]
    fn month_wraps_around_year_end() {
        assert_eq!(Month::new(12).unwrap().succ(), Month::new(1).unwrap());
        assert_eq!(Month::new(1).unwrap().pred(), Month::new(12).unwrap());
    }

    #[test]
    fn month_serializes_as_number() {
        let json = serde_json::to_string(&Month::new(3).unwrap()).unwrap();
        assert_eq!(json, "3");
        assert!(serde_json::from_str::<Month>("13").is_err());
    }

    #[test]
    fn year_validates_range() {
        assert_eq!(Year::new(2021).unwrap().value(), 2021);
        assert!(Year::new(0).is_err());
        assert!(Year::new(10_000).is_err());
    }

    #[test]
    fn year_displays_number() {
        assert_eq!(Year::new(2021).unwrap().to_string(), "2021");
    }
}
