//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod fee;
pub mod session;
pub mod student;

pub use fee::{GetFeeOverviewHandler, GetFeeOverviewQuery, GetMonthlyFeeHandler, GetMonthlyFeeQuery};
pub use session::{
    AddSessionCommand, AddSessionHandler, AddSessionResult, DeleteSessionCommand,
    DeleteSessionHandler, DeleteSessionResult,
};
pub use student::{
    AddStudentCommand, AddStudentHandler, AddStudentResult, DeleteStudentCommand,
    DeleteStudentHandler, DeleteStudentResult, EditStudentCommand, EditStudentHandler,
    EditStudentResult,
};
