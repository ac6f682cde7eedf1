//! Roster change notification port.
//!
//! The shell registers observers to refresh derived views (such as the
//! monthly fee overview) whenever the roster changes.

use crate::domain::student::Student;

/// Callback invoked after every successful roster mutation.
///
/// Receives the roster as it is after the change. Observers run while the
/// repository's write lock is held, so they must return quickly and must not
/// call back into the repository.
pub trait RegistryObserver: Send + Sync {
    fn roster_changed(&self, students: &[Student]);
}

impl<F> RegistryObserver for F
where
    F: Fn(&[Student]) + Send + Sync,
{
    fn roster_changed(&self, students: &[Student]) {
        self(students)
    }
}
