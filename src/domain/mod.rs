//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `session` - Plain and weekly sessions, the split algorithm and per-student storage
//! - `student` - Students and the unique roster
//! - `fee` - Fee aggregation over monthly windows
//!
//! Everything here is synchronous and performs no I/O or logging.

pub mod fee;
pub mod foundation;
pub mod session;
pub mod student;
