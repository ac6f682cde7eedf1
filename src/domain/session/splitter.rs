//! Removal of one occurrence from a weekly series.
//!
//! Removing a date from a recurring session leaves zero, one, or two pieces.
//! A piece holding a single occurrence degenerates to a plain session; longer
//! pieces stay recurring. Non-date attributes carry over unchanged.

use super::{RecurringSession, SessionDate, SessionEntry, SessionError, RECURRENCE_INTERVAL_DAYS};

/// What remains of a series after one occurrence is removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitOutcome {
    /// The series had one occurrence and is gone.
    Removed,
    /// The first or last occurrence was removed.
    Shortened(SessionEntry),
    /// An inner occurrence was removed, leaving the pieces before and after it.
    Split(SessionEntry, SessionEntry),
}

impl SplitOutcome {
    /// Replacement entries in date order.
    pub fn into_entries(self) -> Vec<SessionEntry> {
        match self {
            SplitOutcome::Removed => Vec::new(),
            SplitOutcome::Shortened(entry) => vec![entry],
            SplitOutcome::Split(before, after) => vec![before, after],
        }
    }

    /// Number of replacement entries.
    pub fn len(&self) -> usize {
        match self {
            SplitOutcome::Removed => 0,
            SplitOutcome::Shortened(_) => 1,
            SplitOutcome::Split(..) => 2,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, SplitOutcome::Removed)
    }
}

/// Splits recurring sessions around a removed occurrence.
pub struct SessionSplitter;

impl SessionSplitter {
    /// Removes `occurrence` from `series` without touching the original.
    ///
    /// # Errors
    ///
    /// - `OccurrenceNotInSeries` if `occurrence` is not one of the series' dates
    pub fn remove(
        series: &RecurringSession,
        occurrence: &SessionDate,
    ) -> Result<SplitOutcome, SessionError> {
        if !series.contains(occurrence) {
            return Err(SessionError::not_in_series(*occurrence));
        }

        let start = *series.session_date();
        let end = *series.last_session_date();

        let outcome = match (occurrence == &start, occurrence == &end) {
            (true, true) => SplitOutcome::Removed,
            (true, false) => {
                SplitOutcome::Shortened(Self::piece(series, next(&start), end)?)
            }
            (false, true) => {
                SplitOutcome::Shortened(Self::piece(series, start, previous(&end))?)
            }
            (false, false) => SplitOutcome::Split(
                Self::piece(series, start, previous(occurrence))?,
                Self::piece(series, next(occurrence), end)?,
            ),
        };
        Ok(outcome)
    }

    /// Builds the entry covering `first..=last` with the series' attributes.
    fn piece(
        series: &RecurringSession,
        first: SessionDate,
        last: SessionDate,
    ) -> Result<SessionEntry, SessionError> {
        let session = series.first_session().with_date(first);
        if first == last {
            return Ok(SessionEntry::Plain(session));
        }
        Ok(SessionEntry::Recurring(RecurringSession::new(session, last)?))
    }
}

fn next(date: &SessionDate) -> SessionDate {
    date.add_days(RECURRENCE_INTERVAL_DAYS)
}

fn previous(date: &SessionDate) -> SessionDate {
    date.minus_days(RECURRENCE_INTERVAL_DAYS)
}
