//! Session command handlers.

mod add_session;
mod delete_session;

pub use add_session::{AddSessionCommand, AddSessionHandler, AddSessionResult};
pub use delete_session::{DeleteSessionCommand, DeleteSessionHandler, DeleteSessionResult};
