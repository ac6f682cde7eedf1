//! DeleteSessionHandler - Command handler for deleting a session occurrence.
//!
//! The session is picked by its one-based position in the student's list.
//! For a weekly session the date picks which occurrence to drop; the series
//! is split around it.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, SessionIndex};
use crate::domain::session::{SessionDate, SessionEntry};
use crate::domain::student::Name;
use crate::ports::StudentRepository;

/// Command to delete a session, or one occurrence of a weekly session.
#[derive(Debug, Clone)]
pub struct DeleteSessionCommand {
    pub name: String,
    /// One-based position in the student's session list.
    pub index: usize,
    /// `YYYY-MM-DD`; required for weekly sessions.
    pub date: Option<String>,
}

/// Result of a deletion.
#[derive(Debug, Clone)]
pub struct DeleteSessionResult {
    pub removed: SessionEntry,
    pub replacements: Vec<SessionEntry>,
}

/// Handler for deleting sessions.
pub struct DeleteSessionHandler {
    repository: Arc<dyn StudentRepository>,
}

impl DeleteSessionHandler {
    pub fn new(repository: Arc<dyn StudentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: DeleteSessionCommand,
    ) -> Result<DeleteSessionResult, DomainError> {
        let name = Name::new(cmd.name)?;
        let index = SessionIndex::from_one_based(cmd.index)?;

        // The clock time is taken from the stored entry by the repository.
        let day = cmd
            .date
            .map(|date| SessionDate::parse_day(&date))
            .transpose()?;

        let deleted = self
            .repository
            .delete_session_occurrence(&name, index, day)
            .await?;

        tracing::info!(
            student = %name,
            index = %index,
            replacements = deleted.replacements.len(),
            "Session deleted"
        );

        Ok(DeleteSessionResult {
            removed: deleted.removed,
            replacements: deleted.replacements,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryStudentRepository;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::student::test_support::{plain, student, weekly};

    async fn seeded() -> Arc<InMemoryStudentRepository> {
        let repo = Arc::new(InMemoryStudentRepository::new());
        let alice = Name::new("Alice Pauline").unwrap();
        repo.add(student("Alice Pauline")).await.unwrap();
        repo.add_session(&alice, plain("2020-12-01")).await.unwrap();
        repo.add_session(&alice, weekly("2021-01-01", "2021-03-26", 2500))
            .await
            .unwrap();
        repo
    }

    fn command(index: usize, date: Option<&str>) -> DeleteSessionCommand {
        DeleteSessionCommand {
            name: "Alice Pauline".to_string(),
            index,
            date: date.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn splits_weekly_session_around_date() {
        let repo = seeded().await;
        let handler = DeleteSessionHandler::new(repo.clone());

        let result = handler.handle(command(2, Some("2021-02-12"))).await.unwrap();

        assert_eq!(result.removed, weekly("2021-01-01", "2021-03-26", 2500));
        assert_eq!(
            result.replacements,
            vec![
                weekly("2021-01-01", "2021-02-05", 2500),
                weekly("2021-02-19", "2021-03-26", 2500),
            ]
        );
        let alice = repo.snapshot().await.students()[0].clone();
        assert_eq!(alice.sessions().len(), 3);
    }

    #[tokio::test]
    async fn deletes_plain_session_without_date() {
        let repo = seeded().await;
        let handler = DeleteSessionHandler::new(repo.clone());

        let result = handler.handle(command(1, None)).await.unwrap();

        assert_eq!(result.removed, plain("2020-12-01"));
        assert!(result.replacements.is_empty());
    }

    #[tokio::test]
    async fn weekly_session_needs_date() {
        let handler = DeleteSessionHandler::new(seeded().await);

        let err = handler.handle(command(2, None)).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::OccurrenceRequired);
    }

    #[tokio::test]
    async fn date_outside_series_is_rejected() {
        let handler = DeleteSessionHandler::new(seeded().await);

        let err = handler
            .handle(command(2, Some("2021-02-13")))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::OccurrenceNotInSeries);
    }

    #[tokio::test]
    async fn index_past_end_is_not_found() {
        let handler = DeleteSessionHandler::new(seeded().await);

        let err = handler.handle(command(3, None)).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::SessionNotFound);
    }

    #[tokio::test]
    async fn malformed_date_is_rejected() {
        let handler = DeleteSessionHandler::new(seeded().await);

        let err = handler
            .handle(command(2, Some("2021-02-30")))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::MalformedDateTime);
    }

    #[tokio::test]
    async fn unknown_student_is_not_found() {
        let handler = DeleteSessionHandler::new(seeded().await);

        let err = handler
            .handle(DeleteSessionCommand {
                name: "Carl Kurz".to_string(),
                index: 1,
                date: None,
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::StudentNotFound);
    }

    #[tokio::test]
    async fn index_zero_is_invalid() {
        let handler = DeleteSessionHandler::new(seeded().await);

        let err = handler.handle(command(0, None)).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::OutOfRange);
    }
}
