//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers change the roster; query handlers only read it.

pub mod handlers;

pub use handlers::{
    // Student handlers
    AddStudentCommand, AddStudentHandler, AddStudentResult,
    DeleteStudentCommand, DeleteStudentHandler, DeleteStudentResult,
    EditStudentCommand, EditStudentHandler, EditStudentResult,
    // Session handlers
    AddSessionCommand, AddSessionHandler, AddSessionResult,
    DeleteSessionCommand, DeleteSessionHandler, DeleteSessionResult,
    // Fee handlers
    GetFeeOverviewHandler, GetFeeOverviewQuery, GetMonthlyFeeHandler, GetMonthlyFeeQuery,
};
