//! A stored session: either one occurrence or a weekly series.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Fee, FeeWindow};

use super::{RecurringSession, Session, SessionDate, RECURRENCE_INTERVAL_DAYS};

/// Either kind of session a student can hold.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SessionEntry {
    Plain(Session),
    Recurring(RecurringSession),
}

impl SessionEntry {
    /// Date of the first (or only) occurrence.
    pub fn session_date(&self) -> &SessionDate {
        match self {
            SessionEntry::Plain(session) => session.session_date(),
            SessionEntry::Recurring(series) => series.session_date(),
        }
    }

    /// Date of the last (or only) occurrence.
    pub fn last_session_date(&self) -> &SessionDate {
        match self {
            SessionEntry::Plain(session) => session.session_date(),
            SessionEntry::Recurring(series) => series.last_session_date(),
        }
    }

    /// Fee charged per occurrence.
    pub fn fee(&self) -> Fee {
        match self {
            SessionEntry::Plain(session) => session.fee(),
            SessionEntry::Recurring(series) => series.fee(),
        }
    }

    pub fn is_recurring(&self) -> bool {
        matches!(self, SessionEntry::Recurring(_))
    }

    /// Returns true if `occurrence` is one of this entry's dates.
    pub fn contains(&self, occurrence: &SessionDate) -> bool {
        match self {
            SessionEntry::Plain(session) => session.contains(occurrence),
            SessionEntry::Recurring(series) => series.contains(occurrence),
        }
    }

    /// Every occurrence in date order.
    pub fn occurrences(&self) -> Box<dyn Iterator<Item = SessionDate> + '_> {
        match self {
            SessionEntry::Plain(session) => Box::new(std::iter::once(*session.session_date())),
            SessionEntry::Recurring(series) => Box::new(series.occurrences()),
        }
    }

    /// Returns the first occurrence shared with `other`, if any.
    ///
    /// Both entries sit on a weekly grid anchored at their first date. They
    /// meet only if the clock times match and the first dates are whole weeks
    /// apart, in which case the later first date is shared when it falls on
    /// or before both last dates.
    pub fn first_shared_occurrence(&self, other: &SessionEntry) -> Option<SessionDate> {
        let start = *self.session_date();
        let other_start = *other.session_date();
        if start.time() != other_start.time()
            || start.days_until(&other_start) % RECURRENCE_INTERVAL_DAYS != 0
        {
            return None;
        }

        let shared = start.max(other_start);
        let last = (*self.last_session_date()).min(*other.last_session_date());
        (shared <= last).then_some(shared)
    }

    /// Fee contributed by the occurrences inside `window`.
    pub fn fee_within(&self, window: &FeeWindow) -> Fee {
        match self {
            SessionEntry::Plain(session) => session.fee_within(window),
            SessionEntry::Recurring(series) => series.fee_within(window),
        }
    }
}

impl From<Session> for SessionEntry {
    fn from(session: Session) -> Self {
        SessionEntry::Plain(session)
    }
}

impl From<RecurringSession> for SessionEntry {
    fn from(series: RecurringSession) -> Self {
        SessionEntry::Recurring(series)
    }
}

impl fmt::Display for SessionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionEntry::Plain(session) => write!(f, "{}", session),
            SessionEntry::Recurring(series) => write!(f, "{}", series),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::session::{SessionDuration, Subject};
    use proptest::prelude::*;

    fn date(value: &str) -> SessionDate {
        SessionDate::new(value, "10:00").unwrap()
    }

    fn plain(value: &str) -> Session {
        Session::new(
            date(value),
            SessionDuration::from_minutes(60).unwrap(),
            Subject::new("Math").unwrap(),
            Fee::from_cents(2500),
        )
    }

    fn recurring(start: &str, last: &str) -> SessionEntry {
        RecurringSession::new(plain(start), date(last)).unwrap().into()
    }

    #[test]
    fn shared_occurrence_detects_collision() {
        let series = recurring("2021-01-01", "2021-01-29");
        let clash: SessionEntry = plain("2021-01-15").into();
        let free: SessionEntry = plain("2021-01-16").into();
        assert_eq!(clash.first_shared_occurrence(&series), Some(date("2021-01-15")));
        assert_eq!(free.first_shared_occurrence(&series), None);
    }

    #[test]
    fn shared_occurrence_between_two_series() {
        let a = recurring("2021-01-01", "2021-01-29");
        let b = recurring("2021-01-29", "2021-02-26");
        assert_eq!(b.first_shared_occurrence(&a), Some(date("2021-01-29")));
    }

    #[test]
    fn shared_occurrence_needs_matching_clock_time() {
        let morning = recurring("2021-01-01", "2021-01-29");
        let evening: SessionEntry = RecurringSession::new(
            plain("2021-01-01").with_date(SessionDate::new("2021-01-01", "18:00").unwrap()),
            date("2021-01-29"),
        )
        .unwrap()
        .into();
        assert_eq!(morning.first_shared_occurrence(&evening), None);
    }

    #[test]
    fn series_off_by_days_never_meet() {
        let a = recurring("2021-01-01", "2021-12-31");
        let b = recurring("2021-01-04", "2021-12-27");
        assert_eq!(a.first_shared_occurrence(&b), None);
        assert_eq!(b.first_shared_occurrence(&a), None);
    }

    #[test]
    fn shared_occurrence_of_very_long_series_is_immediate() {
        // Several thousand years of weekly sessions on each side.
        let a = recurring("2021-01-01", "6021-01-01");
        let b = recurring("2021-01-08", "6021-01-08");
        let disjoint = recurring("6021-01-08", "6021-01-29");
        assert_eq!(a.first_shared_occurrence(&b), Some(date("2021-01-08")));
        assert_eq!(b.first_shared_occurrence(&a), Some(date("2021-01-08")));
        assert_eq!(a.first_shared_occurrence(&disjoint), None);
    }

    #[test]
    fn plain_entry_has_single_occurrence() {
        let entry: SessionEntry = plain("2021-01-01").into();
        assert_eq!(entry.occurrences().count(), 1);
        assert!(!entry.is_recurring());
    }

    #[test]
    fn serialization_is_tagged_by_kind() {
        let entry = recurring("2021-01-01", "2021-01-08");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["kind"], "recurring");
        let back: SessionEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);

        let single: SessionEntry = plain("2021-01-01").into();
        let json = serde_json::to_value(&single).unwrap();
        assert_eq!(json["kind"], "plain");
    }

    fn entry_from(offset_days: i64, weeks: Option<i64>) -> SessionEntry {
        let start = date("2021-01-01").add_days(offset_days);
        let first = plain("2021-01-01").with_date(start);
        match weeks {
            Some(weeks) => RecurringSession::new(first, start.add_days(weeks * 7))
                .unwrap()
                .into(),
            None => first.into(),
        }
    }

    proptest! {
        #[test]
        fn shared_occurrence_matches_walking_the_dates(
            a_offset in 0i64..60,
            a_weeks in proptest::option::of(0i64..12),
            b_offset in 0i64..60,
            b_weeks in proptest::option::of(0i64..12),
        ) {
            let a = entry_from(a_offset, a_weeks);
            let b = entry_from(b_offset, b_weeks);
            let walked = a.occurrences().find(|occurrence| b.contains(occurrence));

            prop_assert_eq!(a.first_shared_occurrence(&b), walked);
            prop_assert_eq!(b.first_shared_occurrence(&a), walked);
        }
    }
}
