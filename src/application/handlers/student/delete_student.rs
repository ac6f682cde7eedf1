//! DeleteStudentHandler - Command handler for removing a student.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::student::{Name, Student};
use crate::ports::StudentRepository;

/// Command to remove a student by name.
#[derive(Debug, Clone)]
pub struct DeleteStudentCommand {
    pub name: String,
}

/// Result of a successful removal.
#[derive(Debug, Clone)]
pub struct DeleteStudentResult {
    pub student: Student,
}

/// Handler for removing students.
pub struct DeleteStudentHandler {
    repository: Arc<dyn StudentRepository>,
}

impl DeleteStudentHandler {
    pub fn new(repository: Arc<dyn StudentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: DeleteStudentCommand,
    ) -> Result<DeleteStudentResult, DomainError> {
        let name = Name::new(cmd.name)?;
        let student = self.repository.remove(&name).await?;

        tracing::info!(
            student = %name,
            sessions = student.sessions().len(),
            "Student deleted"
        );

        Ok(DeleteStudentResult { student })
    }
}
