//! Tutor Ledger - Tuition session scheduling and fee tracking
//!
//! This crate implements the core of a tuition management tool: students and
//! their weekly or one-off sessions, deletion of single occurrences from a
//! weekly series, and monthly fee totals.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
