//! Plain (non-recurring) tuition session.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{Fee, FeeWindow, ValidationError};

use super::SessionDate;

/// Length of a session in whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct SessionDuration(u32);

impl SessionDuration {
    /// Creates a duration, returning error if zero.
    pub fn from_minutes(minutes: u32) -> Result<Self, ValidationError> {
        if minutes == 0 {
            return Err(ValidationError::not_positive("duration"));
        }
        Ok(Self(minutes))
    }

    /// Returns the length in minutes.
    pub fn minutes(&self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for SessionDuration {
    type Error = ValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_minutes(value)
    }
}

impl From<SessionDuration> for u32 {
    fn from(duration: SessionDuration) -> Self {
        duration.0
    }
}

impl fmt::Display for SessionDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min", self.0)
    }
}

/// Subject taught in a session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Subject(String);

impl Subject {
    /// Creates a subject, returning error if blank.
    pub fn new(subject: impl Into<String>) -> Result<Self, ValidationError> {
        let subject = subject.into();
        let trimmed = subject.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("subject"));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the subject text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Subject {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Subject> for String {
    fn from(subject: Subject) -> Self {
        subject.0
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One concrete, dated tuition session.
///
/// A session is never edited in place; changing its date produces a new value
/// through [`Session::with_date`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Session {
    session_date: SessionDate,
    duration: SessionDuration,
    subject: Subject,
    fee: Fee,
}

impl Session {
    pub fn new(
        session_date: SessionDate,
        duration: SessionDuration,
        subject: Subject,
        fee: Fee,
    ) -> Self {
        Self {
            session_date,
            duration,
            subject,
            fee,
        }
    }

    pub fn session_date(&self) -> &SessionDate {
        &self.session_date
    }

    pub fn duration(&self) -> SessionDuration {
        self.duration
    }

    pub fn subject(&self) -> &Subject {
        &self.subject
    }

    /// Fee charged for this one occurrence.
    pub fn fee(&self) -> Fee {
        self.fee
    }

    /// Returns a copy of this session moved to another date.
    pub fn with_date(&self, session_date: SessionDate) -> Self {
        Self {
            session_date,
            ..self.clone()
        }
    }

    /// A plain session contains only its own date.
    pub fn contains(&self, occurrence: &SessionDate) -> bool {
        &self.session_date == occurrence
    }

    /// Fee contributed inside `window`: the session fee if it starts there.
    pub fn fee_within(&self, window: &FeeWindow) -> Fee {
        if window.contains(self.session_date.date_time()) {
            self.fee
        } else {
            Fee::ZERO
        }
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} on {} ({}, ${})",
            self.subject, self.session_date, self.duration, self.fee
        )
    }
}
