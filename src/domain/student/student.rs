//! Student record and its sessions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{SessionId, SessionIndex};
use crate::domain::session::{
    DeletedOccurrence, SessionDate, SessionEntry, SessionError, SessionStore,
};

use super::{Address, Email, Name, Phone};

/// A tutored student.
///
/// Two students are the *same student* when their names match
/// ([`Student::is_same_student`]); they are *equal* only when every field,
/// including the full session list, matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    name: Name,
    phone: Phone,
    email: Email,
    address: Address,
    study_level: String,
    guardian_phone: Phone,
    relationship: String,
    #[serde(default)]
    sessions: SessionStore,
}

impl Student {
    /// Creates a student with no sessions.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        study_level: impl Into<String>,
        guardian_phone: Phone,
        relationship: impl Into<String>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            study_level: study_level.into(),
            guardian_phone,
            relationship: relationship.into(),
            sessions: SessionStore::new(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn study_level(&self) -> &str {
        &self.study_level
    }

    pub fn guardian_phone(&self) -> &Phone {
        &self.guardian_phone
    }

    pub fn relationship(&self) -> &str {
        &self.relationship
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Returns true if both students have the same name.
    pub fn is_same_student(&self, other: &Student) -> bool {
        self.name == other.name
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Edited copies
    // ─────────────────────────────────────────────────────────────────────────

    pub fn with_name(self, name: Name) -> Self {
        Self { name, ..self }
    }

    pub fn with_phone(self, phone: Phone) -> Self {
        Self { phone, ..self }
    }

    pub fn with_email(self, email: Email) -> Self {
        Self { email, ..self }
    }

    pub fn with_address(self, address: Address) -> Self {
        Self { address, ..self }
    }

    pub fn with_study_level(self, study_level: impl Into<String>) -> Self {
        Self {
            study_level: study_level.into(),
            ..self
        }
    }

    pub fn with_guardian_phone(self, guardian_phone: Phone) -> Self {
        Self {
            guardian_phone,
            ..self
        }
    }

    pub fn with_relationship(self, relationship: impl Into<String>) -> Self {
        Self {
            relationship: relationship.into(),
            ..self
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Sessions
    // ─────────────────────────────────────────────────────────────────────────

    /// Adds a session.
    ///
    /// # Errors
    ///
    /// - `OverlappingOccurrence` if it shares an occurrence with a stored session
    pub fn add_session(&mut self, entry: SessionEntry) -> Result<SessionId, SessionError> {
        self.sessions.add(entry)
    }

    /// Pairs `day` with the clock time of the session at `index`.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the index is past the end
    pub fn occurrence_on(
        &self,
        index: SessionIndex,
        day: NaiveDate,
    ) -> Result<SessionDate, SessionError> {
        let entry = self
            .sessions
            .get(index)
            .ok_or_else(|| SessionError::not_found(index))?;
        Ok(SessionDate::from_parts(day, entry.session_date().time()))
    }

    /// Deletes one occurrence of the session at `index`.
    ///
    /// A plain session may be deleted without naming its date. A recurring
    /// session needs the occurrence to remove.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the index is past the end
    /// - `MissingOccurrence` if the session is recurring and no date is given
    /// - `OccurrenceNotInSeries` if the session does not cover the date
    pub fn delete_session_occurrence(
        &mut self,
        index: SessionIndex,
        occurrence: Option<&SessionDate>,
    ) -> Result<DeletedOccurrence, SessionError> {
        match occurrence {
            Some(occurrence) => self.sessions.delete_occurrence(index, occurrence),
            None => {
                let entry = self
                    .sessions
                    .get(index)
                    .ok_or_else(|| SessionError::not_found(index))?;
                if entry.is_recurring() {
                    return Err(SessionError::MissingOccurrence);
                }
                let removed = self.sessions.remove(index)?;
                Ok(DeletedOccurrence {
                    removed,
                    replacements: Vec::new(),
                })
            }
        }
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}; Study Level: {}; Guardian Phone: {}; Relationship: {}",
            self.name,
            self.phone,
            self.email,
            self.address,
            self.study_level,
            self.guardian_phone,
            self.relationship
        )
    }
}
