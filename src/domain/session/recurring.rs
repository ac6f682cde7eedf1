//! Weekly recurring tuition session.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Fee, FeeWindow};

use super::{Session, SessionDate, SessionDuration, SessionError, Subject};

/// Days between consecutive occurrences of a recurring session.
pub const RECURRENCE_INTERVAL_DAYS: i64 = 7;

const SECONDS_PER_INTERVAL: i64 = RECURRENCE_INTERVAL_DAYS * 24 * 60 * 60;

/// A weekly series of sessions from a first to a last date, both inclusive.
///
/// # Invariants
///
/// - `last_session_date` is on or after the first session's date
/// - the two dates are a whole number of weeks apart
/// - every occurrence, including the last, is at the first session's clock time
///
/// Boundary changes always produce a new value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RecurringSessionRecord", into = "RecurringSessionRecord")]
pub struct RecurringSession {
    first: Session,
    last_session_date: SessionDate,
}

impl RecurringSession {
    /// Creates a series starting at `first` and ending on `last_session_date`.
    ///
    /// The last date takes the first session's clock time.
    ///
    /// # Errors
    ///
    /// - `InvalidRecurrence` if the last date precedes the first, or is not a
    ///   whole number of weeks after it
    pub fn new(first: Session, last_session_date: SessionDate) -> Result<Self, SessionError> {
        let start = *first.session_date();
        let last = SessionDate::from_parts(last_session_date.date(), start.time());
        let span = start.days_until(&last);

        if span < 0 {
            return Err(SessionError::invalid_recurrence(
                start,
                last,
                "last session is before the first session",
            ));
        }
        if span % RECURRENCE_INTERVAL_DAYS != 0 {
            return Err(SessionError::invalid_recurrence(
                start,
                last,
                format!(
                    "last session must be a multiple of {} days after the first",
                    RECURRENCE_INTERVAL_DAYS
                ),
            ));
        }

        Ok(Self {
            first,
            last_session_date: last,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// The first occurrence, carrying the series' shared attributes.
    pub fn first_session(&self) -> &Session {
        &self.first
    }

    pub fn session_date(&self) -> &SessionDate {
        self.first.session_date()
    }

    pub fn last_session_date(&self) -> &SessionDate {
        &self.last_session_date
    }

    pub fn duration(&self) -> SessionDuration {
        self.first.duration()
    }

    pub fn subject(&self) -> &Subject {
        self.first.subject()
    }

    /// Fee charged per occurrence.
    pub fn fee(&self) -> Fee {
        self.first.fee()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Occurrences
    // ─────────────────────────────────────────────────────────────────────────

    /// Number of occurrences in the series.
    pub fn occurrence_count(&self) -> u64 {
        let span = self.session_date().days_until(&self.last_session_date);
        (span / RECURRENCE_INTERVAL_DAYS) as u64 + 1
    }

    /// Returns true if the series is a single occurrence.
    pub fn is_single_occurrence(&self) -> bool {
        self.session_date() == &self.last_session_date
    }

    /// Every occurrence in date order.
    pub fn occurrences(&self) -> impl Iterator<Item = SessionDate> + '_ {
        let start = *self.session_date();
        (0..self.occurrence_count())
            .map(move |week| start.add_days(week as i64 * RECURRENCE_INTERVAL_DAYS))
    }

    /// Returns true if `occurrence` is one of the series' dates.
    pub fn contains(&self, occurrence: &SessionDate) -> bool {
        let start = self.session_date();
        if occurrence.time() != start.time() {
            return false;
        }
        if occurrence < start || occurrence > &self.last_session_date {
            return false;
        }
        start.days_until(occurrence) % RECURRENCE_INTERVAL_DAYS == 0
    }

    /// Number of occurrences whose date-time falls inside `window`.
    pub fn occurrences_within(&self, window: &FeeWindow) -> u64 {
        let total = self.occurrence_count();
        let from = self.first_week_at_or_after(window.start()).min(total);
        let until = self.first_week_at_or_after(window.end()).min(total);
        until.saturating_sub(from)
    }

    /// Fee for every occurrence inside `window`.
    pub fn fee_within(&self, window: &FeeWindow) -> Fee {
        self.fee().times(self.occurrences_within(window) as usize)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Derived series
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the same series starting on another date.
    ///
    /// # Errors
    ///
    /// - `InvalidRecurrence` if the new start breaks the weekly invariant
    pub fn with_start_date(&self, session_date: SessionDate) -> Result<Self, SessionError> {
        Self::new(self.first.with_date(session_date), self.last_session_date)
    }

    /// Returns the same series ending on another date.
    ///
    /// # Errors
    ///
    /// - `InvalidRecurrence` if the new end breaks the weekly invariant
    pub fn with_last_session_date(
        &self,
        last_session_date: SessionDate,
    ) -> Result<Self, SessionError> {
        Self::new(self.first.clone(), last_session_date)
    }

    /// Index of the first occurrence at or after `instant`.
    fn first_week_at_or_after(&self, instant: chrono::NaiveDateTime) -> u64 {
        let offset = instant
            .signed_duration_since(self.session_date().date_time())
            .num_seconds();
        if offset <= 0 {
            0
        } else {
            (offset.saturating_add(SECONDS_PER_INTERVAL - 1) / SECONDS_PER_INTERVAL) as u64
        }
    }
}

impl fmt::Display for RecurringSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} weekly from {} to {} ({}, ${} each)",
            self.subject(),
            self.session_date(),
            self.last_session_date,
            self.duration(),
            self.fee()
        )
    }
}

/// Serialized shape: the first session's fields plus the last date.
#[derive(Clone, Serialize, Deserialize)]
struct RecurringSessionRecord {
    #[serde(flatten)]
    first: Session,
    last_session_date: SessionDate,
}

impl TryFrom<RecurringSessionRecord> for RecurringSession {
    type Error = SessionError;

    fn try_from(record: RecurringSessionRecord) -> Result<Self, Self::Error> {
        Self::new(record.first, record.last_session_date)
    }
}

impl From<RecurringSession> for RecurringSessionRecord {
    fn from(series: RecurringSession) -> Self {
        Self {
            first: series.first,
            last_session_date: series.last_session_date,
        }
    }
}
