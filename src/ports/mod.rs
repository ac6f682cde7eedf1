//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `StudentRepository` - Roster storage and per-student session changes
//! - `RegistryObserver` - Change hook for views derived from the roster

mod registry_observer;
mod student_repository;

pub use registry_observer::RegistryObserver;
pub use student_repository::StudentRepository;
