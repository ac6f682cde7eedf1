//! Student module - students, their contact details and the unique roster.

mod errors;
mod registry;
#[allow(clippy::module_inception)]
mod student;
mod values;

pub use errors::StudentError;
pub use registry::StudentRegistry;
pub use student::Student;
pub use values::{Address, Email, Name, Phone};

#[cfg(test)]
pub(crate) use student::test_support;
