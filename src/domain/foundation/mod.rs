//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, and error types that form the
//! vocabulary of the tuition domain.

mod errors;
mod fee;
mod fee_window;
mod ids;
mod month;
mod session_index;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use fee::Fee;
pub use fee_window::FeeWindow;
pub use ids::SessionId;
pub use month::{Month, Year, MAX_YEAR, MIN_YEAR};
pub use session_index::SessionIndex;
