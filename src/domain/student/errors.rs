//! Student-specific error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};
use crate::domain::session::SessionError;

use super::Name;

/// Student registry errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StudentError {
    /// Another student already uses this name.
    #[error("Student '{0}' already exists")]
    Duplicate(Name),

    /// No student matches.
    #[error("Student '{0}' not found")]
    NotFound(Name),

    /// A session operation on the student failed.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Validation failed.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl StudentError {
    pub fn duplicate(name: Name) -> Self {
        StudentError::Duplicate(name)
    }
    pub fn not_found(name: Name) -> Self {
        StudentError::NotFound(name)
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            StudentError::Duplicate(_) => ErrorCode::DuplicateStudent,
            StudentError::NotFound(_) => ErrorCode::StudentNotFound,
            StudentError::Session(err) => err.code(),
            StudentError::Validation(err) => err.code(),
        }
    }
}

impl From<StudentError> for DomainError {
    fn from(err: StudentError) -> Self {
        let domain = DomainError::new(err.code(), err.to_string());
        match err {
            StudentError::Duplicate(name) | StudentError::NotFound(name) => {
                domain.with_detail("name", name.as_str())
            }
            _ => domain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Name {
        Name::new("Alice").unwrap()
    }

    #[test]
    fn duplicate_displays_name() {
        let err = StudentError::duplicate(alice());
        assert_eq!(err.to_string(), "Student 'Alice' already exists");
        assert_eq!(err.code(), ErrorCode::DuplicateStudent);
    }

    #[test]
    fn session_errors_keep_their_code() {
        let err: StudentError = SessionError::MissingOccurrence.into();
        assert_eq!(err.code(), ErrorCode::OccurrenceRequired);
    }

    #[test]
    fn converts_to_domain_error_with_name_detail() {
        let err: DomainError = StudentError::not_found(alice()).into();
        assert_eq!(err.code, ErrorCode::StudentNotFound);
        assert_eq!(err.details.get("name"), Some(&"Alice".to_string()));
    }
}
