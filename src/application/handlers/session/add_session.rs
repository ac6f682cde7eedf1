//! AddSessionHandler - Command handler for booking a session for a student.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, Fee, SessionId};
use crate::domain::session::{
    RecurringSession, Session, SessionDate, SessionDuration, SessionEntry, Subject,
};
use crate::domain::student::Name;
use crate::ports::StudentRepository;

/// Command to add a session.
///
/// When `last_date` is set the session repeats weekly up to and including it.
#[derive(Debug, Clone)]
pub struct AddSessionCommand {
    pub name: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    pub duration_minutes: u32,
    pub subject: String,
    /// Dollars, up to two decimals.
    pub fee: String,
    /// `YYYY-MM-DD`; the clock time is taken from `time`.
    pub last_date: Option<String>,
}

/// Result of adding a session.
#[derive(Debug, Clone)]
pub struct AddSessionResult {
    pub session_id: SessionId,
    pub entry: SessionEntry,
}

/// Handler for adding sessions.
pub struct AddSessionHandler {
    repository: Arc<dyn StudentRepository>,
}

impl AddSessionHandler {
    pub fn new(repository: Arc<dyn StudentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: AddSessionCommand) -> Result<AddSessionResult, DomainError> {
        let name = Name::new(cmd.name)?;
        let session_date = SessionDate::new(&cmd.date, &cmd.time)?;
        let session = Session::new(
            session_date,
            SessionDuration::from_minutes(cmd.duration_minutes)?,
            Subject::new(cmd.subject)?,
            Fee::parse(&cmd.fee)?,
        );

        let entry = match cmd.last_date {
            Some(last_date) => {
                let last = SessionDate::on_day(&last_date, session_date.time())?;
                SessionEntry::Recurring(RecurringSession::new(session, last)?)
            }
            None => SessionEntry::Plain(session),
        };

        let session_id = self.repository.add_session(&name, entry.clone()).await?;

        tracing::info!(
            student = %name,
            session = %entry,
            recurring = entry.is_recurring(),
            "Session added"
        );

        Ok(AddSessionResult { session_id, entry })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryStudentRepository;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::student::test_support::student;

    async fn seeded() -> Arc<InMemoryStudentRepository> {
        let repo = Arc::new(InMemoryStudentRepository::new());
        repo.add(student("Alice Pauline")).await.unwrap();
        repo
    }

    fn test_command() -> AddSessionCommand {
        AddSessionCommand {
            name: "Alice Pauline".to_string(),
            date: "2021-01-01".to_string(),
            time: "10:00".to_string(),
            duration_minutes: 90,
            subject: "Physics".to_string(),
            fee: "40.50".to_string(),
            last_date: None,
        }
    }

    #[tokio::test]
    async fn adds_plain_session() {
        let repo = seeded().await;
        let handler = AddSessionHandler::new(repo.clone());

        let result = handler.handle(test_command()).await.unwrap();

        assert!(!result.entry.is_recurring());
        assert_eq!(result.entry.fee(), Fee::from_cents(4050));
        let alice = repo
            .find_by_name(&Name::new("Alice Pauline").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(alice.sessions().len(), 1);
    }

    #[tokio::test]
    async fn adds_weekly_session_when_last_date_given() {
        let repo = seeded().await;
        let handler = AddSessionHandler::new(repo);

        let result = handler
            .handle(AddSessionCommand {
                last_date: Some("2021-01-29".to_string()),
                ..test_command()
            })
            .await
            .unwrap();

        let SessionEntry::Recurring(series) = &result.entry else {
            panic!("expected recurring entry");
        };
        assert_eq!(series.occurrence_count(), 5);
    }

    #[tokio::test]
    async fn rejects_last_date_off_the_weekly_grid() {
        let handler = AddSessionHandler::new(seeded().await);

        let err = handler
            .handle(AddSessionCommand {
                last_date: Some("2021-01-30".to_string()),
                ..test_command()
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidRecurrence);
    }

    #[tokio::test]
    async fn rejects_malformed_time() {
        let handler = AddSessionHandler::new(seeded().await);

        let err = handler
            .handle(AddSessionCommand {
                time: "25:00".to_string(),
                ..test_command()
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::MalformedDateTime);
        assert!(err.message.contains("25:00"));
    }

    #[tokio::test]
    async fn rejects_overlapping_session() {
        let handler = AddSessionHandler::new(seeded().await);
        handler
            .handle(AddSessionCommand {
                last_date: Some("2021-01-29".to_string()),
                ..test_command()
            })
            .await
            .unwrap();

        let err = handler
            .handle(AddSessionCommand {
                date: "2021-01-15".to_string(),
                ..test_command()
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::OverlappingSession);
    }

    #[tokio::test]
    async fn unknown_student_is_not_found() {
        let handler = AddSessionHandler::new(Arc::new(InMemoryStudentRepository::new()));

        let err = handler.handle(test_command()).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::StudentNotFound);
    }
}
