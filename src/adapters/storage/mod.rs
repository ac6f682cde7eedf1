//! Storage Adapters
//!
//! Implementations of the StudentRepository port.
//!
//! ## Available Adapters
//!
//! - **InMemoryStudentRepository** - Stores the roster in memory

mod in_memory_student_repository;

pub use in_memory_student_repository::InMemoryStudentRepository;
