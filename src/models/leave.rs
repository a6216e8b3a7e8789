//! Leave type and leave request models.
//!
//! This module defines the [`LeaveType`] reference data, the
//! [`LeaveRequest`] lifecycle, and the derived [`LeaveBalance`] reported to
//! balance widgets and leave-request forms.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The annual allowance attached to a leave type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveAllowance {
    /// A finite number of days per calendar year.
    FiniteDays(u32),
    /// No annual cap; consumption is never tracked against a balance.
    Unlimited,
}

/// Reference data for one leave type.
///
/// Immutable reference data; an administrator may activate or deactivate a
/// type but never redefines past allowances.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{LeaveAllowance, LeaveType};
///
/// let leave_type = LeaveType {
///     id: "casual_leave".to_string(),
///     name: "Casual Leave".to_string(),
///     annual_allowance: LeaveAllowance::FiniteDays(12),
///     requires_supporting_document: false,
///     is_active: true,
/// };
/// assert!(leave_type.is_active);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveType {
    /// Unique identifier for the leave type.
    pub id: String,
    /// The display name of the leave type.
    pub name: String,
    /// The annual allowance, finite or unlimited.
    pub annual_allowance: LeaveAllowance,
    /// Whether a request of this type needs a supporting document.
    pub requires_supporting_document: bool,
    /// Whether the type is currently offered to employees.
    pub is_active: bool,
}

/// How much of each covered day a leave request consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveCategory {
    /// A whole day per covered date.
    FullDay,
    /// Half a day per covered date.
    HalfDay,
    /// A short absence within the day; does not consume the day allowance.
    ShortLeave,
}

/// The lifecycle status of a leave request.
///
/// A request is created `Pending` and transitions exactly once to
/// `Approved` or `Rejected`; both are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    /// Awaiting a decision from the approver.
    Pending,
    /// Approved; visible to balance and attendance math.
    Approved,
    /// Rejected; invisible to balance and attendance math.
    Rejected,
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequestStatus::Pending => write!(f, "pending"),
            RequestStatus::Approved => write!(f, "approved"),
            RequestStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// A leave request raised by an employee.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{LeaveCategory, LeaveRequest, RequestStatus};
/// use chrono::{NaiveDate, TimeZone, Utc};
///
/// let request = LeaveRequest::new(
///     "emp_001".to_string(),
///     NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 3, 4).unwrap(),
///     "casual_leave".to_string(),
///     LeaveCategory::FullDay,
///     "mgr_007".to_string(),
///     "family function".to_string(),
///     Utc.with_ymd_and_hms(2026, 2, 20, 9, 0, 0).unwrap(),
/// ).unwrap();
///
/// assert_eq!(request.status, RequestStatus::Pending);
/// assert_eq!(request.day_span(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// The employee raising the request.
    pub employee_id: String,
    /// First date covered (inclusive).
    pub from: NaiveDate,
    /// Last date covered (inclusive).
    pub to: NaiveDate,
    /// The leave type being consumed.
    pub leave_type_id: String,
    /// How much of each covered day is consumed.
    pub category: LeaveCategory,
    /// The approver the request is routed to.
    pub approver_id: String,
    /// Free-text reason entered by the employee.
    pub reason: String,
    /// The lifecycle status.
    pub status: RequestStatus,
    /// When the request was created.
    pub created_at: DateTime<Utc>,
}

impl LeaveRequest {
    /// Creates a new request in the `Pending` state.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidDateRange`] when `to < from`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        employee_id: String,
        from: NaiveDate,
        to: NaiveDate,
        leave_type_id: String,
        category: LeaveCategory,
        approver_id: String,
        reason: String,
        created_at: DateTime<Utc>,
    ) -> EngineResult<Self> {
        if to < from {
            return Err(EngineError::InvalidDateRange { from, to });
        }
        Ok(Self {
            employee_id,
            from,
            to,
            leave_type_id,
            category,
            approver_id,
            reason,
            status: RequestStatus::Pending,
            created_at,
        })
    }

    /// Returns the number of calendar days the request covers, inclusive.
    pub fn day_span(&self) -> i64 {
        (self.to - self.from).num_days() + 1
    }

    /// Returns the day-count weight per covered date for this category.
    pub fn category_weight(&self) -> Decimal {
        match self.category {
            LeaveCategory::FullDay => Decimal::ONE,
            LeaveCategory::HalfDay => Decimal::new(5, 1),
            LeaveCategory::ShortLeave => Decimal::ZERO,
        }
    }

    /// Returns true if the request covers the given date.
    pub fn covers(&self, date: NaiveDate) -> bool {
        date >= self.from && date <= self.to
    }

    /// Approves a pending request. Terminal; cannot be repeated.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::RequestAlreadyDecided`] when the request is
    /// no longer pending.
    pub fn approve(&mut self) -> EngineResult<()> {
        match self.status {
            RequestStatus::Pending => {
                self.status = RequestStatus::Approved;
                Ok(())
            }
            status => Err(EngineError::RequestAlreadyDecided { status }),
        }
    }

    /// Rejects a pending request. Terminal; cannot be repeated.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::RequestAlreadyDecided`] when the request is
    /// no longer pending.
    pub fn reject(&mut self) -> EngineResult<()> {
        match self.status {
            RequestStatus::Pending => {
                self.status = RequestStatus::Rejected;
                Ok(())
            }
            status => Err(EngineError::RequestAlreadyDecided { status }),
        }
    }
}

/// The remaining balance for one (employee, leave type) pair.
///
/// Derived, never stored. Computed by
/// [`remaining_balance`](crate::calculation::remaining_balance) and
/// reported to the UI as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveBalance {
    /// The employee the balance belongs to.
    pub employee_id: String,
    /// The leave type the balance is for.
    pub leave_type_id: String,
    /// The calendar year the allowance period covers.
    pub year: i32,
    /// The remaining balance.
    pub remaining: crate::calculation::RemainingBalance,
}
