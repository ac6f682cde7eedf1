//! AddStudentHandler - Command handler for registering a student.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::student::{Address, Email, Name, Phone, Student};
use crate::ports::StudentRepository;

/// Command to register a new student.
#[derive(Debug, Clone)]
pub struct AddStudentCommand {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub study_level: String,
    pub guardian_phone: String,
    pub relationship: String,
}

/// Result of successful registration.
#[derive(Debug, Clone)]
pub struct AddStudentResult {
    pub student: Student,
}

/// Handler for registering students.
pub struct AddStudentHandler {
    repository: Arc<dyn StudentRepository>,
}

impl AddStudentHandler {
    pub fn new(repository: Arc<dyn StudentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: AddStudentCommand) -> Result<AddStudentResult, DomainError> {
        let student = Student::new(
            Name::new(cmd.name)?,
            Phone::new(cmd.phone)?,
            Email::new(cmd.email)?,
            Address::new(cmd.address)?,
            cmd.study_level,
            Phone::new(cmd.guardian_phone)?,
            cmd.relationship,
        );

        self.repository.add(student.clone()).await?;

        tracing::info!(student = %student.name(), "Student added");

        Ok(AddStudentResult { student })
    }
}
