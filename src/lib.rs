//! Working-Calendar and Attendance Computation Engine
//!
//! This crate classifies every day of a month for an employee against an
//! organization's working calendar (weekly-off policy, holidays,
//! working-day overrides), resolves raw punch and leave facts into
//! attendance statuses, aggregates them into the percentages used for
//! payroll and compliance reporting, and tracks remaining leave balances.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
