//! Money amount charged for tuition, held in whole cents.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;
use std::str::FromStr;

use super::ValidationError;

/// A non-negative money amount with cent precision.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fee(u64);

impl Fee {
    /// No charge.
    pub const ZERO: Self = Self(0);

    /// Creates a fee from a number of cents.
    pub fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Parses a decimal amount such as `"40"`, `"40.5"` or `"40.50"`.
    ///
    /// At most two fractional digits are accepted; signs and separators are not.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("fee"));
        }

        let (whole, fraction) = match trimmed.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (trimmed, ""),
        };

        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if whole.is_empty() || !all_digits(whole) || !all_digits(fraction) {
            return Err(ValidationError::invalid_format(
                "fee",
                format!("'{}' is not a non-negative decimal amount", trimmed),
            ));
        }
        if fraction.len() > 2 {
            return Err(ValidationError::invalid_format(
                "fee",
                "at most two decimal places are allowed",
            ));
        }

        let too_large = || ValidationError::invalid_format("fee", "amount is too large");
        let dollars: u64 = whole.parse().map_err(|_| too_large())?;
        let cents: u64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<u64>().map_err(|_| too_large())? * 10,
            _ => fraction.parse().map_err(|_| too_large())?,
        };

        dollars
            .checked_mul(100)
            .and_then(|d| d.checked_add(cents))
            .map(Self)
            .ok_or_else(too_large)
    }

    /// Returns the amount in cents.
    pub fn cents(&self) -> u64 {
        self.0
    }

    /// Returns the fee charged `count` times.
    pub fn times(&self, count: usize) -> Self {
        Self(self.0.saturating_mul(count as u64))
    }

    /// Returns true if nothing is charged.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Add for Fee {
    type Output = Fee;

    fn add(self, rhs: Fee) -> Fee {
        Fee(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Fee {
    fn sum<I: Iterator<Item = Fee>>(iter: I) -> Self {
        iter.fold(Fee::ZERO, Add::add)
    }
}

impl FromStr for Fee {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Fee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}
