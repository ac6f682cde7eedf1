//! Unique student list.
//!
//! Students are unique by name. Lookups for update and removal use full
//! equality, so a caller holding a stale copy gets `NotFound` instead of
//! silently overwriting newer data.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SessionId, SessionIndex};
use crate::domain::session::{DeletedOccurrence, SessionDate, SessionEntry};

use super::{Name, Student, StudentError};

/// Roster of students with unique names, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Student>", into = "Vec<Student>")]
pub struct StudentRegistry {
    students: Vec<Student>,
}

impl StudentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Student> {
        self.students.iter()
    }

    /// Returns true if a student with the same name is registered.
    pub fn contains(&self, student: &Student) -> bool {
        self.students.iter().any(|s| s.is_same_student(student))
    }

    pub fn has_name(&self, name: &Name) -> bool {
        self.find_by_name(name).is_some()
    }

    pub fn find_by_name(&self, name: &Name) -> Option<&Student> {
        self.students.iter().find(|s| s.name() == name)
    }

    /// Returns true if any student holds an identical session entry.
    pub fn has_session(&self, entry: &SessionEntry) -> bool {
        self.students.iter().any(|s| s.sessions().has_entry(entry))
    }

    /// Returns true if any student has a session covering `occurrence`.
    pub fn has_occurrence(&self, occurrence: &SessionDate) -> bool {
        self.students
            .iter()
            .any(|s| s.sessions().has_occurrence(occurrence))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Appends a student.
    ///
    /// # Errors
    ///
    /// - `Duplicate` if a student with the same name exists
    pub fn add(&mut self, student: Student) -> Result<(), StudentError> {
        if self.contains(&student) {
            return Err(StudentError::duplicate(student.name().clone()));
        }
        self.students.push(student);
        Ok(())
    }

    /// Replaces `target` with `edited` in place.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no registered student equals `target`
    /// - `Duplicate` if `edited` takes the name of another student
    pub fn set_student(&mut self, target: &Student, edited: Student) -> Result<(), StudentError> {
        let position = self
            .students
            .iter()
            .position(|s| s == target)
            .ok_or_else(|| StudentError::not_found(target.name().clone()))?;

        if !target.is_same_student(&edited) && self.contains(&edited) {
            return Err(StudentError::duplicate(edited.name().clone()));
        }

        self.students[position] = edited;
        Ok(())
    }

    /// Removes a student equal to `target`.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no registered student equals `target`
    pub fn remove(&mut self, target: &Student) -> Result<Student, StudentError> {
        let position = self
            .students
            .iter()
            .position(|s| s == target)
            .ok_or_else(|| StudentError::not_found(target.name().clone()))?;
        Ok(self.students.remove(position))
    }

    /// Replaces the whole roster.
    ///
    /// # Errors
    ///
    /// - `Duplicate` if two students share a name; the roster is unchanged
    pub fn set_students(&mut self, students: Vec<Student>) -> Result<(), StudentError> {
        *self = Self::try_from(students)?;
        Ok(())
    }

    /// Adds a session to the named student.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no student has the name
    /// - `Session` if the session overlaps one the student already has
    pub fn add_session(
        &mut self,
        name: &Name,
        entry: SessionEntry,
    ) -> Result<SessionId, StudentError> {
        let student = self.student_mut(name)?;
        Ok(student.add_session(entry)?)
    }

    /// Deletes one occurrence of the named student's session at `index`.
    ///
    /// `day` is paired with the clock time of the entry stored at `index`
    /// when the call runs. On error the student's sessions are unchanged.
    pub fn delete_session_occurrence(
        &mut self,
        name: &Name,
        index: SessionIndex,
        day: Option<NaiveDate>,
    ) -> Result<DeletedOccurrence, StudentError> {
        let student = self.student_mut(name)?;
        let occurrence = day
            .map(|day| student.occurrence_on(index, day))
            .transpose()?;
        Ok(student.delete_session_occurrence(index, occurrence.as_ref())?)
    }

    fn student_mut(&mut self, name: &Name) -> Result<&mut Student, StudentError> {
        self.students
            .iter_mut()
            .find(|s| s.name() == name)
            .ok_or_else(|| StudentError::not_found(name.clone()))
    }
}

impl TryFrom<Vec<Student>> for StudentRegistry {
    type Error = StudentError;

    fn try_from(students: Vec<Student>) -> Result<Self, Self::Error> {
        let mut registry = Self::new();
        for student in students {
            registry.add(student)?;
        }
        Ok(registry)
    }
}

impl From<StudentRegistry> for Vec<Student> {
    fn from(registry: StudentRegistry) -> Self {
        registry.students
    }
}

impl<'a> IntoIterator for &'a StudentRegistry {
    type Item = &'a Student;
    type IntoIter = std::slice::Iter<'a, Student>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
