//! Monthly attendance summary models.
//!
//! This module contains the [`MonthSummary`] produced by the monthly
//! aggregator and the [`AttendanceReport`] envelope returned to the UI
//! layer.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::AttendanceStatus;

/// The per-day statuses and derived statistics for one employee's month.
///
/// `days` contains exactly one entry per calendar day of the month, no
/// gaps and no duplicates. `working_days` counts days the calendar
/// classifies as working, independent of whether the employee attended, so
/// the percentage denominator excludes holidays and weekly-offs by
/// construction.
///
/// # Example
///
/// ```
/// use attendance_engine::models::MonthSummary;
/// use rust_decimal::Decimal;
/// use std::collections::BTreeMap;
///
/// let summary = MonthSummary {
///     employee_id: "emp_001".to_string(),
///     year: 2026,
///     month: 1,
///     days: BTreeMap::new(),
///     working_days: 0,
///     present_equivalent: Decimal::ZERO,
///     present_percentage: Decimal::new(0, 2),
/// };
/// assert_eq!(summary.present_percentage.to_string(), "0.00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthSummary {
    /// The employee the summary is for.
    pub employee_id: String,
    /// The calendar year.
    pub year: i32,
    /// The month number (1-12).
    pub month: u32,
    /// One attendance status per day of the month.
    pub days: BTreeMap<NaiveDate, AttendanceStatus>,
    /// Count of days classified as working days by the calendar.
    pub working_days: u32,
    /// Present + Late count, plus 0.5 per half day.
    pub present_equivalent: Decimal,
    /// Present percentage over working days, two decimals, in [0, 100].
    pub present_percentage: Decimal,
}

/// The report envelope wrapping a [`MonthSummary`] for the UI layer.
///
/// Carries the identifiers a report consumer needs to reference or cache
/// the computation: a fresh report id, the generation timestamp, and the
/// engine version that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceReport {
    /// Unique id for this report.
    pub report_id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// The engine version that produced the report.
    pub engine_version: String,
    /// The computed summary.
    pub summary: MonthSummary,
}
