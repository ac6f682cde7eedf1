//! Student repository port.
//!
//! Defines the contract for storing the roster and applying session changes
//! to a student. Implementations must apply each mutation atomically: a
//! failed call leaves the roster exactly as it was.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::foundation::{DomainError, SessionId, SessionIndex};
use crate::domain::session::{DeletedOccurrence, SessionEntry};
use crate::domain::student::{Name, Student};

/// Repository port for the student roster.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Add a new student.
    ///
    /// # Errors
    ///
    /// - `DuplicateStudent` if a student with the same name exists
    async fn add(&self, student: Student) -> Result<(), DomainError>;

    /// Replace `expected` with `edited`.
    ///
    /// `expected` is the copy the caller read. If the stored student has
    /// changed since, nothing is written.
    ///
    /// # Errors
    ///
    /// - `StudentNotFound` if no stored student equals `expected`
    /// - `DuplicateStudent` if `edited` takes another student's name
    async fn update(&self, expected: &Student, edited: Student) -> Result<(), DomainError>;

    /// Remove the named student and return it.
    ///
    /// # Errors
    ///
    /// - `StudentNotFound` if no student has the name
    async fn remove(&self, name: &Name) -> Result<Student, DomainError>;

    /// Find a student by name.
    ///
    /// Returns `None` if not found.
    async fn find_by_name(&self, name: &Name) -> Result<Option<Student>, DomainError>;

    /// Snapshot of every student in roster order.
    async fn list(&self) -> Result<Vec<Student>, DomainError>;

    /// Add a session to the named student.
    ///
    /// # Errors
    ///
    /// - `StudentNotFound` if no student has the name
    /// - `OverlappingSession` if the session collides with an existing one
    async fn add_session(&self, name: &Name, entry: SessionEntry)
        -> Result<SessionId, DomainError>;

    /// Delete one occurrence of the named student's session at `index`.
    ///
    /// `day` is paired with the clock time of the entry found at `index`
    /// inside the same atomic step.
    ///
    /// # Errors
    ///
    /// - `StudentNotFound` if no student has the name
    /// - `SessionNotFound` if the index is out of range
    /// - `OccurrenceRequired` if the session is recurring and no date is given
    /// - `OccurrenceNotInSeries` if the session does not cover the date
    async fn delete_session_occurrence(
        &self,
        name: &Name,
        index: SessionIndex,
        day: Option<NaiveDate>,
    ) -> Result<DeletedOccurrence, DomainError>;
}
