//! In-Memory Student Repository Adapter
//!
//! Holds the roster in memory behind a reader/writer lock. Every mutation is
//! applied to a copy of the roster which replaces the live one only on
//! success, so readers never observe a half-applied change.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, SessionId, SessionIndex};
use crate::domain::session::{DeletedOccurrence, SessionEntry};
use crate::domain::student::{Name, Student, StudentError, StudentRegistry};
use crate::ports::{RegistryObserver, StudentRepository};

/// In-memory roster storage.
#[derive(Clone, Default)]
pub struct InMemoryStudentRepository {
    registry: Arc<RwLock<StudentRegistry>>,
    observers: Arc<RwLock<Vec<Arc<dyn RegistryObserver>>>>,
}

impl InMemoryStudentRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository seeded with `registry`
    pub fn with_registry(registry: StudentRegistry) -> Self {
        Self {
            registry: Arc::new(RwLock::new(registry)),
            observers: Arc::default(),
        }
    }

    /// Register a callback run after every successful mutation
    pub async fn subscribe(&self, observer: Arc<dyn RegistryObserver>) {
        self.observers.write().await.push(observer);
    }

    /// Snapshot of the whole roster
    pub async fn snapshot(&self) -> StudentRegistry {
        self.registry.read().await.clone()
    }

    /// Get the number of stored students
    pub async fn student_count(&self) -> usize {
        self.registry.read().await.len()
    }

    /// Applies `op` to a copy of the roster and swaps it in on success.
    async fn mutate<T>(
        &self,
        operation: &'static str,
        op: impl FnOnce(&mut StudentRegistry) -> Result<T, StudentError> + Send,
    ) -> Result<T, DomainError> {
        let mut live = self.registry.write().await;
        let mut draft = live.clone();

        let value = op(&mut draft).map_err(|err| {
            tracing::debug!(operation, error = %err, "Roster change rejected");
            DomainError::from(err)
        })?;

        *live = draft;
        tracing::debug!(operation, students = live.len(), "Roster updated");

        let observers = self.observers.read().await;
        for observer in observers.iter() {
            observer.roster_changed(live.students());
        }
        Ok(value)
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn add(&self, student: Student) -> Result<(), DomainError> {
        self.mutate("add_student", |registry| registry.add(student))
            .await
    }

    async fn update(&self, expected: &Student, edited: Student) -> Result<(), DomainError> {
        self.mutate("edit_student", |registry| {
            registry.set_student(expected, edited)
        })
        .await
    }

    async fn remove(&self, name: &Name) -> Result<Student, DomainError> {
        self.mutate("delete_student", |registry| {
            let current = registry
                .find_by_name(name)
                .cloned()
                .ok_or_else(|| StudentError::not_found(name.clone()))?;
            registry.remove(&current)
        })
        .await
    }

    async fn find_by_name(&self, name: &Name) -> Result<Option<Student>, DomainError> {
        let registry = self.registry.read().await;
        Ok(registry.find_by_name(name).cloned())
    }

    async fn list(&self) -> Result<Vec<Student>, DomainError> {
        let registry = self.registry.read().await;
        Ok(registry.students().to_vec())
    }

    async fn add_session(
        &self,
        name: &Name,
        entry: SessionEntry,
    ) -> Result<SessionId, DomainError> {
        self.mutate("add_session", |registry| registry.add_session(name, entry))
            .await
    }

    async fn delete_session_occurrence(
        &self,
        name: &Name,
        index: SessionIndex,
        day: Option<NaiveDate>,
    ) -> Result<DeletedOccurrence, DomainError> {
        self.mutate("delete_session", |registry| {
            registry.delete_session_occurrence(name, index, day)
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::student::test_support::*;
    use crate::domain::student::Phone;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn name(value: &str) -> Name {
        Name::new(value).unwrap()
    }

    #[tokio::test]
    async fn add_and_find_student() {
        let repo = InMemoryStudentRepository::new();
        repo.add(student("Alice Pauline")).await.unwrap();

        let found = repo.find_by_name(&name("Alice Pauline")).await.unwrap();
        assert_eq!(found, Some(student("Alice Pauline")));
        assert_eq!(repo.student_count().await, 1);
    }

    #[tokio::test]
    async fn duplicate_add_reports_code() {
        let repo = InMemoryStudentRepository::new();
        repo.add(student("Alice Pauline")).await.unwrap();

        let err = repo.add(student("Alice Pauline")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DuplicateStudent);
        assert_eq!(repo.student_count().await, 1);
    }

    #[tokio::test]
    async fn update_unknown_student_is_not_found() {
        let repo = InMemoryStudentRepository::new();
        let err = repo
            .update(&student("Nobody"), student("Alice Pauline"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::StudentNotFound);
    }

    #[tokio::test]
    async fn update_from_stale_copy_keeps_newer_sessions() {
        let repo = InMemoryStudentRepository::new();
        repo.add(student("Alice Pauline")).await.unwrap();
        let alice = name("Alice Pauline");

        let read = repo.find_by_name(&alice).await.unwrap().unwrap();
        repo.add_session(&alice, weekly("2021-01-01", "2021-01-29", 2500))
            .await
            .unwrap();
        let edited = read.clone().with_phone(Phone::new("99999999").unwrap());

        let err = repo.update(&read, edited).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::StudentNotFound);
        let stored = repo.find_by_name(&alice).await.unwrap().unwrap();
        assert_eq!(stored.sessions().len(), 1);
        assert_eq!(stored.phone(), read.phone());
    }

    #[tokio::test]
    async fn update_from_current_copy_applies() {
        let repo = InMemoryStudentRepository::new();
        repo.add(student("Alice Pauline")).await.unwrap();
        let alice = name("Alice Pauline");
        repo.add_session(&alice, plain("2021-01-01")).await.unwrap();

        let read = repo.find_by_name(&alice).await.unwrap().unwrap();
        let edited = read.clone().with_phone(Phone::new("99999999").unwrap());
        repo.update(&read, edited.clone()).await.unwrap();

        assert_eq!(repo.find_by_name(&alice).await.unwrap(), Some(edited));
    }

    #[tokio::test]
    async fn failed_delete_leaves_roster_unchanged() {
        let repo = InMemoryStudentRepository::new();
        repo.add(student("Alice Pauline")).await.unwrap();
        repo.add_session(&name("Alice Pauline"), weekly("2021-01-01", "2021-01-29", 2500))
            .await
            .unwrap();
        let before = repo.snapshot().await;

        let err = repo
            .delete_session_occurrence(
                &name("Alice Pauline"),
                SessionIndex::FIRST,
                Some(day("2021-01-03")),
            )
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::OccurrenceNotInSeries);
        assert_eq!(repo.snapshot().await, before);
    }

    #[tokio::test]
    async fn observers_see_each_successful_change() {
        let repo = InMemoryStudentRepository::new();
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = calls.clone();
        repo.subscribe(Arc::new(move |_: &[Student]| {
            seen.fetch_add(1, Ordering::SeqCst);
        }))
        .await;

        repo.add(student("Alice Pauline")).await.unwrap();
        let _ = repo.add(student("Alice Pauline")).await;
        repo.remove(&name("Alice Pauline")).await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn concurrent_readers_see_whole_splits() {
        let repo = InMemoryStudentRepository::new();
        repo.add(student("Alice Pauline")).await.unwrap();
        repo.add_session(&name("Alice Pauline"), weekly("2021-01-01", "2021-03-26", 2500))
            .await
            .unwrap();

        let reader = {
            let repo = repo.clone();
            tokio::spawn(async move {
                for _ in 0..50 {
                    let students = repo.list().await.unwrap();
                    let occurrences: usize = students[0]
                        .sessions()
                        .entries()
                        .map(|e| e.occurrences().count())
                        .sum();
                    assert!(occurrences == 13 || occurrences == 12);
                    tokio::task::yield_now().await;
                }
            })
        };

        repo.delete_session_occurrence(
            &name("Alice Pauline"),
            SessionIndex::FIRST,
            Some(day("2021-02-12")),
        )
        .await
        .unwrap();

        reader.await.unwrap();
    }

    #[tokio::test]
    async fn delete_by_day_resolves_entry_at_call_time() {
        let repo = InMemoryStudentRepository::new();
        repo.add(student("Alice Pauline")).await.unwrap();
        let alice = name("Alice Pauline");
        repo.add_session(&alice, plain("2021-01-01")).await.unwrap();
        repo.add_session(&alice, weekly("2021-01-08", "2021-02-05", 2500))
            .await
            .unwrap();

        // The plain entry goes away, so the series moves to the first slot.
        repo.delete_session_occurrence(&alice, SessionIndex::FIRST, None)
            .await
            .unwrap();
        let deleted = repo
            .delete_session_occurrence(&alice, SessionIndex::FIRST, Some(day("2021-01-22")))
            .await
            .unwrap();

        assert_eq!(deleted.removed, weekly("2021-01-08", "2021-02-05", 2500));
        let stored = repo.find_by_name(&alice).await.unwrap().unwrap();
        let entries: Vec<_> = stored.sessions().entries().cloned().collect();
        assert_eq!(
            entries,
            vec![
                weekly("2021-01-08", "2021-01-15", 2500),
                weekly("2021-01-29", "2021-02-05", 2500),
            ]
        );
    }
}
