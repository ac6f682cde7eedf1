//! EditStudentHandler - Command handler for editing a student's details.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::student::{Address, Email, Name, Phone, Student, StudentError};
use crate::ports::StudentRepository;

/// Command to edit a student. Fields left as `None` keep their value.
#[derive(Debug, Clone, Default)]
pub struct EditStudentCommand {
    pub name: String,
    pub new_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub study_level: Option<String>,
    pub guardian_phone: Option<String>,
    pub relationship: Option<String>,
}

impl EditStudentCommand {
    fn has_changes(&self) -> bool {
        self.new_name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.study_level.is_some()
            || self.guardian_phone.is_some()
            || self.relationship.is_some()
    }
}

/// Result of a successful edit.
#[derive(Debug, Clone)]
pub struct EditStudentResult {
    pub student: Student,
}

/// Handler for editing students.
pub struct EditStudentHandler {
    repository: Arc<dyn StudentRepository>,
}

impl EditStudentHandler {
    pub fn new(repository: Arc<dyn StudentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: EditStudentCommand) -> Result<EditStudentResult, DomainError> {
        if !cmd.has_changes() {
            return Err(DomainError::validation(
                "fields",
                "At least one field to edit must be provided",
            ));
        }

        let name = Name::new(cmd.name)?;
        let current = self
            .repository
            .find_by_name(&name)
            .await?
            .ok_or_else(|| StudentError::not_found(name.clone()))?;

        let mut edited = current.clone();
        if let Some(new_name) = cmd.new_name {
            edited = edited.with_name(Name::new(new_name)?);
        }
        if let Some(phone) = cmd.phone {
            edited = edited.with_phone(Phone::new(phone)?);
        }
        if let Some(email) = cmd.email {
            edited = edited.with_email(Email::new(email)?);
        }
        if let Some(address) = cmd.address {
            edited = edited.with_address(Address::new(address)?);
        }
        if let Some(study_level) = cmd.study_level {
            edited = edited.with_study_level(study_level);
        }
        if let Some(guardian_phone) = cmd.guardian_phone {
            edited = edited.with_guardian_phone(Phone::new(guardian_phone)?);
        }
        if let Some(relationship) = cmd.relationship {
            edited = edited.with_relationship(relationship);
        }

        self.repository.update(&current, edited.clone()).await?;

        tracing::info!(student = %name, edited = %edited.name(), "Student edited");

        Ok(EditStudentResult { student: edited })
    }
}
