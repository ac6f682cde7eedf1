//! Student command handlers.

mod add_student;
mod delete_student;
mod edit_student;

pub use add_student::{AddStudentCommand, AddStudentHandler, AddStudentResult};
pub use delete_student::{DeleteStudentCommand, DeleteStudentHandler, DeleteStudentResult};
pub use edit_student::{EditStudentCommand, EditStudentHandler, EditStudentResult};
