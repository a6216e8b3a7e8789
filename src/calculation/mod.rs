//! Calculation logic for the attendance engine.
//!
//! This module contains the pure computation functions: day classification
//! against the working calendar, attendance status resolution from raw
//! punch and leave facts, monthly aggregation into summary statistics, and
//! leave balance accounting.
//!
//! Everything here is a synchronous, side-effect-free function over
//! immutable inputs; repeated calls with identical inputs return identical
//! results.

mod day_classification;
mod leave_balance;
mod monthly_summary;
mod status_resolution;

pub use day_classification::{classify_day, week_of_month, DayKind};
pub use leave_balance::{remaining_balance, validate_request, RemainingBalance};
pub use monthly_summary::{aggregate_month, days_in_month};
pub use status_resolution::{resolve_status, AttendanceThresholds};
