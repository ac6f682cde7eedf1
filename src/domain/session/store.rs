//! Per-student ordered collection of sessions.
//!
//! Entries are addressed by a [`SessionId`] handle minted on insert, or by
//! the one-based [`SessionIndex`] the user sees. Indexes shift when entries
//! are removed or split, so they are only meaningful within one operation.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{SessionId, SessionIndex};

use super::{SessionDate, SessionEntry, SessionError, SessionSplitter, SplitOutcome};

/// A stored entry and its handle.
#[derive(Debug, Clone)]
struct StoredSession {
    id: SessionId,
    entry: SessionEntry,
}

impl StoredSession {
    fn id(&self) -> SessionId {
        self.id
    }

    fn entry(&self) -> &SessionEntry {
        &self.entry
    }
}

/// Result of deleting one occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletedOccurrence {
    /// The entry that was at the requested index.
    pub removed: SessionEntry,
    /// Entries that took its place, in order.
    pub replacements: Vec<SessionEntry>,
}

/// Ordered sessions of one student.
///
/// # Invariants
///
/// - no two entries share an exact occurrence (date and clock time)
/// - order is insertion order, with split pieces taking the original's place
///
/// Equality compares entries only; handles are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<SessionEntry>", into = "Vec<SessionEntry>")]
pub struct SessionStore {
    sessions: Vec<StoredSession>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Entries in display order.
    pub fn entries(&self) -> impl Iterator<Item = &SessionEntry> + '_ {
        self.sessions.iter().map(StoredSession::entry)
    }

    /// Returns the entry at a one-based index.
    pub fn get(&self, index: SessionIndex) -> Option<&SessionEntry> {
        self.sessions.get(index.zero_based()).map(StoredSession::entry)
    }

    /// Returns the handle of the entry at a one-based index.
    pub fn id_at(&self, index: SessionIndex) -> Option<SessionId> {
        self.sessions.get(index.zero_based()).map(StoredSession::id)
    }

    /// Returns the current index of a handle.
    pub fn index_of(&self, id: SessionId) -> Option<SessionIndex> {
        self.position(id).map(SessionIndex::from_zero_based)
    }

    /// Returns true if an identical entry is stored.
    pub fn has_entry(&self, entry: &SessionEntry) -> bool {
        self.entries().any(|stored| stored == entry)
    }

    /// Returns true if any entry covers `occurrence`.
    pub fn has_occurrence(&self, occurrence: &SessionDate) -> bool {
        self.entries().any(|entry| entry.contains(occurrence))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Appends an entry.
    ///
    /// # Errors
    ///
    /// - `OverlappingOccurrence` if it shares an occurrence with a stored entry
    pub fn add(&mut self, entry: SessionEntry) -> Result<SessionId, SessionError> {
        self.ensure_disjoint(&entry, None)?;
        let id = SessionId::new();
        self.sessions.push(StoredSession { id, entry });
        Ok(id)
    }

    /// Removes the entry at a one-based index.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the index is past the end
    pub fn remove(&mut self, index: SessionIndex) -> Result<SessionEntry, SessionError> {
        if index.zero_based() >= self.sessions.len() {
            return Err(SessionError::not_found(index));
        }
        Ok(self.sessions.remove(index.zero_based()).entry)
    }

    /// Replaces the entry behind `id` with `replacements`, in place.
    ///
    /// Either every replacement is inserted or the store is unchanged.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the handle is not stored
    /// - `OverlappingOccurrence` if a replacement collides with another entry
    pub fn replace(
        &mut self,
        id: SessionId,
        replacements: Vec<SessionEntry>,
    ) -> Result<Vec<SessionId>, SessionError> {
        let position = self
            .position(id)
            .ok_or_else(|| SessionError::not_found(SessionIndex::from_zero_based(self.len())))?;

        for (i, replacement) in replacements.iter().enumerate() {
            self.ensure_disjoint(replacement, Some(id))?;
            if let Some(clash) = replacements[..i]
                .iter()
                .find_map(|earlier| replacement.first_shared_occurrence(earlier))
            {
                return Err(SessionError::overlapping(clash));
            }
        }

        let stored: Vec<StoredSession> = replacements
            .into_iter()
            .map(|entry| StoredSession {
                id: SessionId::new(),
                entry,
            })
            .collect();
        let ids = stored.iter().map(StoredSession::id).collect();
        self.sessions.splice(position..=position, stored);
        Ok(ids)
    }

    /// Deletes one occurrence of the entry at `index`.
    ///
    /// A plain entry is removed outright. A recurring entry is split around
    /// the occurrence and the pieces take its place.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the index is past the end
    /// - `OccurrenceNotInSeries` if the entry does not cover `occurrence`
    pub fn delete_occurrence(
        &mut self,
        index: SessionIndex,
        occurrence: &SessionDate,
    ) -> Result<DeletedOccurrence, SessionError> {
        let stored = self
            .sessions
            .get(index.zero_based())
            .ok_or_else(|| SessionError::not_found(index))?;

        let outcome = match &stored.entry {
            SessionEntry::Plain(session) => {
                if !session.contains(occurrence) {
                    return Err(SessionError::not_in_series(*occurrence));
                }
                SplitOutcome::Removed
            }
            SessionEntry::Recurring(series) => SessionSplitter::remove(series, occurrence)?,
        };

        let id = stored.id;
        let removed = stored.entry.clone();
        let replacements = outcome.into_entries();
        self.replace(id, replacements.clone())?;

        Ok(DeletedOccurrence {
            removed,
            replacements,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn position(&self, id: SessionId) -> Option<usize> {
        self.sessions.iter().position(|stored| stored.id == id)
    }

    fn ensure_disjoint(
        &self,
        entry: &SessionEntry,
        ignoring: Option<SessionId>,
    ) -> Result<(), SessionError> {
        let clash = self
            .sessions
            .iter()
            .filter(|stored| Some(stored.id) != ignoring)
            .find_map(|stored| entry.first_shared_occurrence(&stored.entry));
        match clash {
            Some(occurrence) => Err(SessionError::overlapping(occurrence)),
            None => Ok(()),
        }
    }
}

impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        self.entries().eq(other.entries())
    }
}

impl Eq for SessionStore {}

impl TryFrom<Vec<SessionEntry>> for SessionStore {
    type Error = SessionError;

    fn try_from(entries: Vec<SessionEntry>) -> Result<Self, Self::Error> {
        let mut store = Self::new();
        for entry in entries {
            store.add(entry)?;
        }
        Ok(store)
    }
}

impl From<SessionStore> for Vec<SessionEntry> {
    fn from(store: SessionStore) -> Self {
        store.sessions.into_iter().map(|stored| stored.entry).collect()
    }
}
