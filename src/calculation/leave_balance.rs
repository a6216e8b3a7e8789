//! Leave balance accounting.
//!
//! This module computes the remaining balance for one (employee, leave
//! type) pair from the approved leave consumption within a calendar year,
//! and validates incoming leave requests against the active leave-type
//! set.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{LeaveAllowance, LeaveRequest, LeaveType, RequestStatus};

/// The remaining balance for a leave type.
///
/// `Finite` balances are clamped at zero and never negative; `Unlimited`
/// types always report `Unlimited`, never a number.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::RemainingBalance;
/// use rust_decimal::Decimal;
///
/// let balance = RemainingBalance::Finite(Decimal::from(7));
/// assert_ne!(balance, RemainingBalance::Unlimited);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemainingBalance {
    /// A concrete number of days remaining, zero or more.
    Finite(Decimal),
    /// The leave type has no cap; there is no number to run down.
    Unlimited,
}

/// Returns the number of days a request consumes within a calendar year.
///
/// The request's date span is clipped to the year, so a span crossing the
/// year boundary only consumes the days inside the queried year. The
/// per-day weight comes from the request category: full days count 1.0,
/// half days 0.5, short leaves 0.
fn consumed_days_in_year(request: &LeaveRequest, year: i32) -> Decimal {
    let year_start = NaiveDate::from_ymd_opt(year, 1, 1);
    let year_end = NaiveDate::from_ymd_opt(year, 12, 31);
    let (Some(year_start), Some(year_end)) = (year_start, year_end) else {
        return Decimal::ZERO;
    };

    let from = request.from.max(year_start);
    let to = request.to.min(year_end);
    if to < from {
        return Decimal::ZERO;
    }

    let days = Decimal::from((to - from).num_days() + 1);
    days * request.category_weight()
}

/// Computes the remaining balance for one employee and leave type.
///
/// Sums the day-counts of every `Approved` request of the given type by
/// the given employee within the allowance period (a fixed calendar
/// year), subtracts from the annual allowance, and clamps at zero: the
/// balance never goes negative even when an administrator retroactively
/// approves more than remains. `Pending` and `Rejected` requests are
/// invisible to the math. `Unlimited` types always return
/// [`RemainingBalance::Unlimited`] and ignore consumption entirely.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::{remaining_balance, RemainingBalance};
/// use attendance_engine::models::{LeaveAllowance, LeaveType};
/// use rust_decimal::Decimal;
///
/// let leave_type = LeaveType {
///     id: "casual_leave".to_string(),
///     name: "Casual Leave".to_string(),
///     annual_allowance: LeaveAllowance::FiniteDays(12),
///     requires_supporting_document: false,
///     is_active: true,
/// };
///
/// let balance = remaining_balance("emp_001", &leave_type, &[], 2026);
/// assert_eq!(balance, RemainingBalance::Finite(Decimal::from(12)));
/// ```
pub fn remaining_balance(
    employee_id: &str,
    leave_type: &LeaveType,
    requests: &[LeaveRequest],
    year: i32,
) -> RemainingBalance {
    let allowance = match leave_type.annual_allowance {
        LeaveAllowance::Unlimited => return RemainingBalance::Unlimited,
        LeaveAllowance::FiniteDays(days) => Decimal::from(days),
    };

    let consumed: Decimal = requests
        .iter()
        .filter(|r| {
            r.status == RequestStatus::Approved
                && r.employee_id == employee_id
                && r.leave_type_id == leave_type.id
        })
        .map(|r| consumed_days_in_year(r, year))
        .sum();

    // Normalize so a 11.0 renders as 11 in balance widgets.
    RemainingBalance::Finite((allowance - consumed).max(Decimal::ZERO).normalize())
}

/// Validates a leave request against the active leave-type set.
///
/// This is the check a leave-request form runs before saving: the date
/// range must be ordered and the leave type must exist and be active.
///
/// # Errors
///
/// - [`EngineError::InvalidDateRange`] when `to < from`;
/// - [`EngineError::UnknownLeaveType`] when the referenced type is absent
///   from the set or deactivated.
pub fn validate_request(
    request: &LeaveRequest,
    leave_types: &HashMap<String, LeaveType>,
) -> EngineResult<()> {
    if request.to < request.from {
        return Err(EngineError::InvalidDateRange {
            from: request.from,
            to: request.to,
        });
    }

    match leave_types.get(&request.leave_type_id) {
        Some(leave_type) if leave_type.is_active => Ok(()),
        _ => Err(EngineError::UnknownLeaveType {
            id: request.leave_type_id.clone(),
        }),
    }
}
