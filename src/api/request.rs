//! Request types for the attendance engine API.
//!
//! This module defines the JSON request structures for the
//! `/attendance/summary` and `/leave/balance` endpoints.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{AttendanceRecord, LeaveCategory, LeaveRequest, RequestStatus};

/// Request body for the `/attendance/summary` endpoint.
///
/// Contains the viewing context (employee, month, year) and the raw
/// attendance records the punch source collected for that month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthSummaryRequest {
    /// The employee to summarize.
    pub employee_id: String,
    /// The month number (1-12).
    pub month: u32,
    /// The calendar year.
    pub year: i32,
    /// The employee's raw attendance records for the month.
    #[serde(default)]
    pub records: Vec<AttendanceRecordRequest>,
}

/// One raw attendance record in a summary request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecordRequest {
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

/// Request body for the `/leave/balance` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveBalanceRequest {
    /// The employee to compute the balance for.
    pub employee_id: String,
    /// The leave type to compute the balance of.
    pub leave_type_id: String,
    /// The allowance year.
    pub year: i32,
    /// The employee's leave requests.
    #[serde(default)]
    pub requests: Vec<LeaveRequestRequest>,
}

/// One leave request in a balance request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequestRequest {
    /// The employee who raised the request.
    pub employee_id: String,
    /// First date covered (inclusive).
    pub from: NaiveDate,
    /// Last date covered (inclusive).
    pub to: NaiveDate,
    /// The leave type being consumed.
    pub leave_type_id: String,
    /// How much of each covered day is consumed.
    pub category: LeaveCategory,
    /// The approver the request was routed to.
    pub approver_id: String,
    /// Free-text reason entered by the employee.
    #[serde(default)]
    pub reason: String,
    /// The lifecycle status.
    pub status: RequestStatus,
    /// When the request was created.
    pub created_at: DateTime<Utc>,
}

impl From<AttendanceRecordRequest> for AttendanceRecord {
    fn from(req: AttendanceRecordRequest) -> Self {
        AttendanceRecord {
            date: req.date,
            check_in: req.check_in,
            check_out: req.check_out,
            approved_leave: req.approved_leave,
            location: req.location,
        }
    }
}

impl From<LeaveRequestRequest> for LeaveRequest {
    fn from(req: LeaveRequestRequest) -> Self {
        LeaveRequest {
            employee_id: req.employee_id,
            from: req.from,
            to: req.to,
            leave_type_id: req.leave_type_id,
            category: req.category,
            approver_id: req.approver_id,
            reason: req.reason,
            status: req.status,
            created_at: req.created_at,
        }
    }
}
