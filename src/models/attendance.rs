//! Attendance record and status models.
//!
//! This module defines the raw [`AttendanceRecord`] input consumed by the
//! status resolver, and the [`AttendanceStatus`] code assigned to each
//! (employee, date) pair.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Raw attendance facts for one employee on one date.
///
/// Records are created by the check-in/check-out collaborator (or
/// synthesized for historical display); the engine only classifies them,
/// it never creates or mutates them. The `location` field is display-only
/// and plays no part in classification.
///
/// # Example
///
/// ```
/// use attendance_engine::models::AttendanceRecord;
/// use chrono::{NaiveDate, NaiveTime};
///
/// let record = AttendanceRecord {
///     date: NaiveDate::from_ymd_opt(2026, 1, 13).unwrap(),
///     check_in: Some(NaiveTime::from_hms_opt(9, 42, 0).unwrap()),
///     check_out: Some(NaiveTime::from_hms_opt(18, 5, 0).unwrap()),
///     approved_leave: None,
///     location: Some("head_office".to_string()),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The date the record applies to.
    pub date: NaiveDate,
    /// The check-in time, if the employee punched in.
    #[serde(default)]
    pub check_in: Option<NaiveTime>,
    /// The check-out time, if the employee punched out.
    #[serde(default)]
    pub check_out: Option<NaiveTime>,
    /// The id of the approved leave type covering this date, if any.
    #[serde(default)]
    pub approved_leave: Option<String>,
    /// Where the punch was recorded. Display-only.
    #[serde(default)]
    pub location: Option<String>,
}

impl AttendanceRecord {
    /// Returns an empty record for a date with no punches and no leave.
    ///
    /// Used by the aggregator for days the punch source produced nothing;
    /// on a working day such a record resolves to `Absent`.
    pub fn blank(date: NaiveDate) -> Self {
        Self {
            date,
            check_in: None,
            check_out: None,
            approved_leave: None,
            location: None,
        }
    }
}

/// The attendance status assigned to one (employee, date) pair.
///
/// Exactly one status applies per day. `OnLeave` carries the id of the
/// leave type consumed.
///
/// # Example
///
/// ```
/// use attendance_engine::models::AttendanceStatus;
///
/// let status = AttendanceStatus::OnLeave {
///     leave_type: "casual_leave".to_string(),
/// };
/// assert_ne!(status, AttendanceStatus::Present);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// Checked in on or before the late threshold.
    Present,
    /// Checked in after the late threshold but not past the half-day one.
    Late,
    /// Checked in after the half-day threshold; counts 0.5 toward presence.
    HalfDay,
    /// Covered by an approved leave request.
    OnLeave {
        /// The id of the leave type consumed.
        leave_type: String,
    },
    /// The date is an organizational holiday.
    Holiday,
    /// The date is a weekly off per policy.
    WeeklyOff,
    /// A working day with no check-in and no approved leave.
    Absent,
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttendanceStatus::Present => write!(f, "Present"),
            AttendanceStatus::Late => write!(f, "Late"),
            AttendanceStatus::HalfDay => write!(f, "HalfDay"),
            AttendanceStatus::OnLeave { leave_type } => write!(f, "OnLeave({})", leave_type),
            AttendanceStatus::Holiday => write!(f, "Holiday"),
            AttendanceStatus::WeeklyOff => write!(f, "WeeklyOff"),
            AttendanceStatus::Absent => write!(f, "Absent"),
        }
    }
}
