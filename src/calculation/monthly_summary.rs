//! Monthly attendance aggregation.
//!
//! This module walks every calendar day of a month for one employee,
//! classifies it, resolves the attendance status from the employee's raw
//! records, and folds the per-day statuses into a [`MonthSummary`].

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, AttendanceStatus, CalendarRuleSet, MonthSummary};

use super::day_classification::{classify_day, DayKind};
use super::status_resolution::{resolve_status, AttendanceThresholds};

/// Returns the number of days in a month.
///
/// # Errors
///
/// Returns [`EngineError::InvalidMonth`] when the month/year pair does not
/// name a real calendar month.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::days_in_month;
///
/// assert_eq!(days_in_month(1, 2026).unwrap(), 31);
/// assert_eq!(days_in_month(2, 2026).unwrap(), 28);
/// assert_eq!(days_in_month(2, 2028).unwrap(), 29);
/// assert!(days_in_month(13, 2026).is_err());
/// ```
pub fn days_in_month(month: u32, year: i32) -> EngineResult<u32> {
    let first =
        NaiveDate::from_ymd_opt(year, month, 1).ok_or(EngineError::InvalidMonth { month, year })?;

    let next_month_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or(EngineError::InvalidMonth { month, year })?;

    Ok((next_month_first - first).num_days() as u32)
}

/// Aggregates one employee's month into a [`MonthSummary`].
///
/// For every calendar day of the month the day is classified via the rule
/// set, then the employee's record for that date (a blank record when the
/// punch source produced none) is resolved to a status. The summary map
/// holds exactly one entry per day, no gaps and no duplicates. When more
/// than one record carries the same date, the last one wins.
///
/// Derived statistics:
/// - `working_days` counts `WorkingDay` classifications, independent of
///   attendance, so holidays and weekly-offs never enter the denominator;
/// - `present_equivalent` counts `Present` and `Late` as 1.0 and `HalfDay`
///   as 0.5;
/// - `present_percentage` is `present_equivalent / working_days x 100`
///   rounded to two decimals, reported as `0.00` when `working_days` is
///   zero instead of dividing by zero.
///
/// # Errors
///
/// Returns [`EngineError::InvalidMonth`] for an impossible month/year and
/// propagates [`EngineError::ThresholdOrdering`] from status resolution.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::{aggregate_month, AttendanceThresholds};
/// use attendance_engine::models::CalendarRuleSet;
/// use chrono::NaiveTime;
///
/// let thresholds = AttendanceThresholds {
///     late_after: NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
///     half_day_after: NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
/// };
///
/// let summary = aggregate_month(
///     "emp_001",
///     1,
///     2026,
///     &CalendarRuleSet::empty(),
///     &thresholds,
///     &[],
/// ).unwrap();
///
/// assert_eq!(summary.days.len(), 31);
/// assert_eq!(summary.working_days, 31);
/// // No records at all: every working day is absent.
/// assert_eq!(summary.present_percentage.to_string(), "0.00");
/// ```
pub fn aggregate_month(
    employee_id: &str,
    month: u32,
    year: i32,
    ruleset: &CalendarRuleSet,
    thresholds: &AttendanceThresholds,
    records: &[AttendanceRecord],
) -> EngineResult<MonthSummary> {
    let day_count = days_in_month(month, year)?;

    let records_by_date: BTreeMap<NaiveDate, &AttendanceRecord> =
        records.iter().map(|r| (r.date, r)).collect();

    let mut days = BTreeMap::new();
    let mut working_days: u32 = 0;
    let mut present_equivalent = Decimal::ZERO;

    for day in 1..=day_count {
        // day_count came from a validated (month, year), so each date exists
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(EngineError::InvalidMonth { month, year })?;

        let day_kind = classify_day(date, ruleset);
        if day_kind == DayKind::WorkingDay {
            working_days += 1;
        }

        let blank;
        let record = match records_by_date.get(&date) {
            Some(record) => *record,
            None => {
                blank = AttendanceRecord::blank(date);
                &blank
            }
        };

        let status = resolve_status(&day_kind, record, thresholds)?;
        match status {
            AttendanceStatus::Present | AttendanceStatus::Late => {
                present_equivalent += Decimal::ONE;
            }
            AttendanceStatus::HalfDay => {
                present_equivalent += Decimal::new(5, 1);
            }
            _ => {}
        }

        days.insert(date, status);
    }

    // Normalize so two half days render as 1, not 1.0.
    let present_equivalent = present_equivalent.normalize();

    let mut present_percentage = if working_days == 0 {
        Decimal::ZERO
    } else {
        (present_equivalent / Decimal::from(working_days) * Decimal::from(100)).round_dp(2)
    };
    // Fix the scale so the value always renders with two decimals.
    present_percentage.rescale(2);

    Ok(MonthSummary {
        employee_id: employee_id.to_string(),
        year,
        month,
        days,
        working_days,
        present_equivalent,
        present_percentage,
    })
}
