//! Half-open date-time interval used to select billable occurrences.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Month, ValidationError, Year};

/// The interval `[start, end)`.
///
/// A calendar month's window runs from midnight on its first day up to, but
/// not including, midnight on the first day of the next month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "FeeWindowRecord")]
pub struct FeeWindow {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

#[derive(Deserialize)]
struct FeeWindowRecord {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl TryFrom<FeeWindowRecord> for FeeWindow {
    type Error = ValidationError;

    fn try_from(record: FeeWindowRecord) -> Result<Self, Self::Error> {
        Self::new(record.start, record.end)
    }
}

impl FeeWindow {
    /// Creates a window, returning error if `end` is before `start`.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, ValidationError> {
        if end < start {
            return Err(ValidationError::invalid_format(
                "fee_window",
                format!("window end {} is before start {}", end, start),
            ));
        }
        Ok(Self { start, end })
    }

    /// Returns the window covering one calendar month.
    pub fn for_month(month: Month, year: Year) -> Self {
        let start = first_of_month(year.value(), month.number());
        let (next_year, next_month) = if month.number() == 12 {
            (year.value() + 1, 1)
        } else {
            (year.value(), month.number() + 1)
        };
        let end = first_of_month(next_year, next_month);
        Self { start, end }
    }

    /// Returns the window for the month containing `instant`.
    pub fn containing(instant: NaiveDateTime) -> Self {
        let start = first_of_month(instant.year(), instant.month());
        let end = start
            .date()
            .checked_add_months(chrono::Months::new(1))
            .map_or(NaiveDateTime::MAX, |d| d.and_time(start.time()));
        Self { start, end }
    }

    /// Returns the window for the month before this one.
    pub fn previous_month(&self) -> Self {
        let start = self
            .start
            .date()
            .checked_sub_months(chrono::Months::new(1))
            .map_or(NaiveDateTime::MIN, |d| d.and_time(self.start.time()));
        Self {
            start,
            end: self.start,
        }
    }

    /// Inclusive lower bound.
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// Exclusive upper bound.
    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Returns true if `instant` lies in `[start, end)`.
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        self.start <= instant && instant < self.end
    }

    /// Returns the month and year the window starts in.
    pub fn month_and_year(&self) -> Option<(Month, Year)> {
        let month = Month::new(self.start.month()).ok()?;
        let year = Year::new(self.start.year()).ok()?;
        Some((month, year))
    }
}

impl fmt::Display for FeeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

fn first_of_month(year: i32, month: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or(NaiveDateTime::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn deserialization_checks_window_order() {
        let window: FeeWindow = serde_json::from_str(
            r#"{"start":"2021-02-01T00:00:00","end":"2021-03-01T00:00:00"}"#,
        )
        .unwrap();
        assert_eq!(window, FeeWindow::for_month(Month::new(2).unwrap(), Year::new(2021).unwrap()));

        let backwards = r#"{"start":"2021-03-01T00:00:00","end":"2021-02-01T00:00:00"}"#;
        assert!(serde_json::from_str::<FeeWindow>(backwards).is_err());
    }

    #[test]
    fn february_window_ends_at_march_first() {
        let window = FeeWindow::for_month(Month::new(2).unwrap(), Year::new(2021).unwrap());
        assert_eq!(window.start(), at(2021, 2, 1, 0, 0));
        assert_eq!(window.end(), at(2021, 3, 1, 0, 0));
    }

    #[test]
    fn december_window_rolls_into_next_year() {
        let window = FeeWindow::for_month(Month::new(12).unwrap(), Year::new(2021).unwrap());
        assert_eq!(window.end(), at(2022, 1, 1, 0, 0));
    }

    #[test]
    fn window_is_half_open() {
        let window = FeeWindow::for_month(Month::new(2).unwrap(), Year::new(2021).unwrap());
        assert!(window.contains(at(2021, 2, 1, 0, 0)));
        assert!(window.contains(at(2021, 2, 28, 23, 59)));
        assert!(!window.contains(at(2021, 3, 1, 0, 0)));
        assert!(!window.contains(at(2021, 1, 31, 23, 59)));
    }

    #[test]
    fn containing_finds_month_of_instant() {
        let window = FeeWindow::containing(at(2021, 3, 17, 15, 30));
        assert_eq!(
            window,
            FeeWindow::for_month(Month::new(3).unwrap(), Year::new(2021).unwrap())
        );
    }

    #[test]
    fn previous_month_steps_back_across_year() {
        let january = FeeWindow::for_month(Month::new(1).unwrap(), Year::new(2021).unwrap());
        let december = january.previous_month();
        assert_eq!(
            december,
            FeeWindow::for_month(Month::new(12).unwrap(), Year::new(2020).unwrap())
        );
        assert_eq!(
            december.month_and_year(),
            Some((Month::new(12).unwrap(), Year::new(2020).unwrap()))
        );
    }

    #[test]
    fn new_rejects_reversed_bounds() {
        assert!(FeeWindow::new(at(2021, 3, 1, 0, 0), at(2021, 2, 1, 0, 0)).is_err());
        assert!(FeeWindow::new(at(2021, 2, 1, 0, 0), at(2021, 2, 1, 0, 0)).is_ok());
    }
}
