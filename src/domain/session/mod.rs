//! Session domain module.
//!
//! Tuition sessions come in two kinds: a plain [`Session`] with one dated
//! occurrence, and a [`RecurringSession`] covering a weekly run of dates.
//! [`SessionEntry`] holds either kind.
//!
//! Deleting one occurrence of a recurring session goes through
//! [`SessionSplitter`], which yields zero, one, or two replacement entries
//! that [`SessionStore`] splices back in place of the original.

mod entry;
mod errors;
mod recurring;
#[allow(clippy::module_inception)]
mod session;
mod session_date;
mod splitter;
mod store;

pub use entry::SessionEntry;
pub use errors::SessionError;
pub use recurring::{RecurringSession, RECURRENCE_INTERVAL_DAYS};
pub use session::{Session, SessionDuration, Subject};
pub use session_date::SessionDate;
pub use splitter::{SessionSplitter, SplitOutcome};
pub use store::{DeletedOccurrence, SessionStore};
