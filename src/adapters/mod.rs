//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Roster storage (in-memory)

pub mod storage;

pub use storage::InMemoryStudentRepository;
