//! SessionDate value object: a calendar date plus a clock time.

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::SessionError;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMATS: [&str; 2] = ["%H:%M", "%H:%M:%S"];
const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S%.f"];

/// Date and time of a tuition session.
///
/// Equality and ordering look only at the calendar date and the clock time.
/// There is no timezone and no sub-second part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionDate(NaiveDateTime);

impl SessionDate {
    /// Parses a `YYYY-MM-DD` date and an `HH:MM` time.
    ///
    /// # Errors
    ///
    /// - `MalformedDateTime` naming whichever input failed to parse
    pub fn new(date: &str, time: &str) -> Result<Self, SessionError> {
        let date = parse_date(date)?;
        let time = parse_time(time)?;
        Ok(Self::from_parts(date, time))
    }

    /// Parses a combined `YYYY-MM-DDTHH:MM[:SS]` value.
    ///
    /// # Errors
    ///
    /// - `MalformedDateTime` if the value is not a valid date-time
    pub fn parse(date_time: &str) -> Result<Self, SessionError> {
        let trimmed = date_time.trim();
        let mut last_error = None;
        for format in DATE_TIME_FORMATS {
            match NaiveDateTime::parse_from_str(trimmed, format) {
                Ok(parsed) => return Ok(Self::from_date_time(parsed)),
                Err(err) => last_error = Some(err),
            }
        }
        Err(SessionError::malformed(
            date_time,
            last_error.map_or_else(|| "unrecognised format".to_string(), |e| e.to_string()),
        ))
    }

    /// Parses a `YYYY-MM-DD` date and pairs it with a known clock time.
    ///
    /// # Errors
    ///
    /// - `MalformedDateTime` if the date does not parse
    pub fn on_day(date: &str, time: NaiveTime) -> Result<Self, SessionError> {
        Ok(Self::from_parts(Self::parse_day(date)?, time))
    }

    /// Parses a bare `YYYY-MM-DD` calendar date.
    ///
    /// # Errors
    ///
    /// - `MalformedDateTime` if the date does not parse
    pub fn parse_day(date: &str) -> Result<NaiveDate, SessionError> {
        parse_date(date)
    }

    /// Builds a session date from an already-valid date and time.
    pub fn from_parts(date: NaiveDate, time: NaiveTime) -> Self {
        Self::from_date_time(date.and_time(time))
    }

    /// Builds a session date from a date-time, dropping any sub-second part.
    pub fn from_date_time(date_time: NaiveDateTime) -> Self {
        Self(date_time.with_nanosecond(0).unwrap_or(date_time))
    }

    /// Returns the calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    /// Returns the clock time.
    pub fn time(&self) -> NaiveTime {
        self.0.time()
    }

    /// Returns the combined date-time.
    pub fn date_time(&self) -> NaiveDateTime {
        self.0
    }

    /// Shifts the date by `days`, keeping the clock time.
    ///
    /// Returns `None` if the result falls outside the supported calendar.
    pub fn checked_add_days(&self, days: i64) -> Option<Self> {
        let magnitude = Days::new(days.unsigned_abs());
        let shifted = if days >= 0 {
            self.0.checked_add_days(magnitude)
        } else {
            self.0.checked_sub_days(magnitude)
        };
        shifted.map(Self)
    }

    /// Returns a date `days` later with the same clock time.
    ///
    /// Saturates at the first or last supported calendar date.
    pub fn add_days(&self, days: i64) -> Self {
        self.checked_add_days(days)
            .unwrap_or_else(|| self.saturated(days >= 0))
    }

    /// Returns a date `days` earlier with the same clock time.
    ///
    /// Saturates at the first or last supported calendar date.
    pub fn minus_days(&self, days: i64) -> Self {
        match days.checked_neg() {
            Some(negated) => self.add_days(negated),
            None => self.saturated(true),
        }
    }

    /// Number of calendar days from this date to `other`, ignoring clock time.
    pub fn days_until(&self, other: &SessionDate) -> i64 {
        other.date().signed_duration_since(self.date()).num_days()
    }

    fn saturated(&self, forward: bool) -> Self {
        let date = if forward { NaiveDate::MAX } else { NaiveDate::MIN };
        Self::from_parts(date, self.time())
    }
}

impl FromStr for SessionDate {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SessionDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M"))
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, SessionError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|err| SessionError::malformed(value, err))
}

fn parse_time(value: &str) -> Result<NaiveTime, SessionError> {
    let trimmed = value.trim();
    let mut last_error = None;
    for format in TIME_FORMATS {
        match NaiveTime::parse_from_str(trimmed, format) {
            Ok(parsed) => return Ok(parsed),
            Err(err) => last_error = Some(err),
        }
    }
    Err(SessionError::malformed(
        value,
        last_error.map_or_else(|| "unrecognised format".to_string(), |e| e.to_string()),
    ))
}
