//! Session-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, SessionIndex, ValidationError};

use super::SessionDate;

/// Session-specific errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// A date or time string could not be parsed.
    #[error("Format of date or time is incorrect: '{value}' ({reason})")]
    MalformedDateTime { value: String, reason: String },

    /// Recurrence boundaries do not describe a weekly series.
    #[error("Invalid recurrence from {start} to {last}: {reason}")]
    InvalidRecurrence {
        start: SessionDate,
        last: SessionDate,
        reason: String,
    },

    /// No session exists at the given position.
    #[error("Session not found at index {0}")]
    NotFound(SessionIndex),

    /// The occurrence is not one of the series' dates.
    #[error("Session on {occurrence} is not part of the recurring series")]
    OccurrenceNotInSeries { occurrence: SessionDate },

    /// Deleting from a recurring series needs the occurrence date.
    #[error("A date is required to delete one session of a recurring series")]
    MissingOccurrence,

    /// The session shares an occurrence with a stored session.
    #[error("A session on {occurrence} already exists")]
    OverlappingOccurrence { occurrence: SessionDate },

    /// Validation failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl SessionError {
    pub fn malformed(value: impl Into<String>, reason: impl ToString) -> Self {
        SessionError::MalformedDateTime {
            value: value.into(),
            reason: reason.to_string(),
        }
    }
    pub fn invalid_recurrence(
        start: SessionDate,
        last: SessionDate,
        reason: impl Into<String>,
    ) -> Self {
        SessionError::InvalidRecurrence {
            start,
            last,
            reason: reason.into(),
        }
    }
    pub fn not_found(index: SessionIndex) -> Self {
        SessionError::NotFound(index)
    }
    pub fn not_in_series(occurrence: SessionDate) -> Self {
        SessionError::OccurrenceNotInSeries { occurrence }
    }
    pub fn overlapping(occurrence: SessionDate) -> Self {
        SessionError::OverlappingOccurrence { occurrence }
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            SessionError::MalformedDateTime { .. } => ErrorCode::MalformedDateTime,
            SessionError::InvalidRecurrence { .. } => ErrorCode::InvalidRecurrence,
            SessionError::NotFound(_) => ErrorCode::SessionNotFound,
            SessionError::OccurrenceNotInSeries { .. } => ErrorCode::OccurrenceNotInSeries,
            SessionError::MissingOccurrence => ErrorCode::OccurrenceRequired,
            SessionError::OverlappingOccurrence { .. } => ErrorCode::OverlappingSession,
            SessionError::Validation(err) => err.code(),
        }
    }
}

impl From<SessionError> for DomainError {
    fn from(err: SessionError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
