//! Attendance status resolution logic.
//!
//! This module maps a day's [`DayKind`] plus the employee's raw punch and
//! leave facts for that date to exactly one [`AttendanceStatus`].

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, AttendanceStatus};

use super::day_classification::DayKind;

/// Org-configured clock-time thresholds for late and half-day check-ins.
///
/// A check-in strictly after `late_after` is late; strictly after
/// `half_day_after` it drops to half-day. `half_day_after` must not be
/// earlier than `late_after` or the two states could not be ordered.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::AttendanceThresholds;
/// use chrono::NaiveTime;
///
/// let thresholds = AttendanceThresholds {
///     late_after: NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
///     half_day_after: NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
/// };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceThresholds {
    /// Check-ins strictly after this time are late.
    pub late_after: NaiveTime,
    /// Check-ins strictly after this time count as half days.
    pub half_day_after: NaiveTime,
}

impl AttendanceThresholds {
    /// Validates the threshold ordering.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ThresholdOrdering`] when `half_day_after`
    /// is earlier than `late_after`.
    pub fn validate(&self) -> EngineResult<()> {
        if self.half_day_after < self.late_after {
            return Err(EngineError::ThresholdOrdering {
                late_after: self.late_after,
                half_day_after: self.half_day_after,
            });
        }
        Ok(())
    }
}

/// Resolves the attendance status for one (employee, date) pair.
///
/// # Precedence
///
/// Highest first, each short-circuiting the rest:
/// 1. A holiday day-kind yields `Holiday`.
/// 2. A weekly-off day-kind yields `WeeklyOff`; a punch on an off day
///    does not reclassify it, calendar truth wins over raw punches.
/// 3. An approved leave on the date yields `OnLeave`.
/// 4. No check-in yields `Absent`.
/// 5. A check-in past the half-day threshold yields `HalfDay`. The
///    half-day bound is checked before the late bound: when both are
///    exceeded the later, more specific cutoff decides.
/// 6. A check-in past the late threshold yields `Late`.
/// 7. Otherwise `Present`.
///
/// # Errors
///
/// Returns [`EngineError::ThresholdOrdering`] when the thresholds are not
/// ordered (`half_day_after < late_after`).
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::{resolve_status, AttendanceThresholds, DayKind};
/// use attendance_engine::models::{AttendanceRecord, AttendanceStatus};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let thresholds = AttendanceThresholds {
///     late_after: NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
///     half_day_after: NaiveTime::from_hms_opt(11, 0, 0).unwrap(),
/// };
/// let record = AttendanceRecord {
///     date: NaiveDate::from_ymd_opt(2026, 1, 13).unwrap(),
///     check_in: Some(NaiveTime::from_hms_opt(10, 45, 0).unwrap()),
///     check_out: None,
///     approved_leave: None,
///     location: None,
/// };
///
/// let status = resolve_status(&DayKind::WorkingDay, &record, &thresholds).unwrap();
/// assert_eq!(status, AttendanceStatus::Late);
/// ```
pub fn resolve_status(
    day_kind: &DayKind,
    record: &AttendanceRecord,
    thresholds: &AttendanceThresholds,
) -> EngineResult<AttendanceStatus> {
    thresholds.validate()?;

    match day_kind {
        DayKind::Holiday(_) => return Ok(AttendanceStatus::Holiday),
        DayKind::WeeklyOff => return Ok(AttendanceStatus::WeeklyOff),
        DayKind::WorkingDay => {}
    }

    if let Some(leave_type) = &record.approved_leave {
        return Ok(AttendanceStatus::OnLeave {
            leave_type: leave_type.clone(),
        });
    }

    let Some(check_in) = record.check_in else {
        return Ok(AttendanceStatus::Absent);
    };

    if check_in > thresholds.half_day_after {
        Ok(AttendanceStatus::HalfDay)
    } else if check_in > thresholds.late_after {
        Ok(AttendanceStatus::Late)
    } else {
        Ok(AttendanceStatus::Present)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_time(time_str: &str) -> NaiveTime {
        NaiveTime::parse_from_str(time_str, "%H:%M:%S").unwrap()
    }

    fn office_thresholds() -> AttendanceThresholds {
        AttendanceThresholds {
            late_after: make_time("10:30:00"),
            half_day_after: make_time("11:00:00"),
        }
    }

    fn record_with_check_in(time_str: &str) -> AttendanceRecord {
        AttendanceRecord {
            date: make_date("2026-01-13"),
            check_in: Some(make_time(time_str)),
            check_out: Some(make_time("18:00:00")),
            approved_leave: None,
            location: None,
        }
    }

    // ==========================================================================
    // SR-001: holiday day-kind short-circuits everything
    // ==========================================================================
    #[test]
    fn test_sr_001_holiday_wins_over_punch_and_leave() {
        let mut record = record_with_check_in("09:00:00");
        record.approved_leave = Some("casual_leave".to_string());

        let status = resolve_status(
            &DayKind::Holiday("Republic Day".to_string()),
            &record,
            &office_thresholds(),
        )
        .unwrap();

        assert_eq!(status, AttendanceStatus::Holiday);
    }

    // ==========================================================================
    // SR-002: a punch on a weekly off does not reclassify the day
    // ==========================================================================
    #[test]
    fn test_sr_002_weekly_off_wins_over_punch() {
        let record = record_with_check_in("09:00:00");

        let status =
            resolve_status(&DayKind::WeeklyOff, &record, &office_thresholds()).unwrap();

        assert_eq!(status, AttendanceStatus::WeeklyOff);
    }

    // ==========================================================================
    // SR-003: approved leave wins over punches on a working day
    // ==========================================================================
    #[test]
    fn test_sr_003_approved_leave_wins_over_punch() {
        let mut record = record_with_check_in("09:00:00");
        record.approved_leave = Some("sick_leave".to_string());

        let status =
            resolve_status(&DayKind::WorkingDay, &record, &office_thresholds()).unwrap();

        assert_eq!(
            status,
            AttendanceStatus::OnLeave {
                leave_type: "sick_leave".to_string()
            }
        );
    }

    // ==========================================================================
    // SR-004: no check-in on a working day is absent
    // ==========================================================================
    #[test]
    fn test_sr_004_no_check_in_is_absent() {
        let record = AttendanceRecord::blank(make_date("2026-01-13"));

        let status =
            resolve_status(&DayKind::WorkingDay, &record, &office_thresholds()).unwrap();

        assert_eq!(status, AttendanceStatus::Absent);
    }

    // ==========================================================================
    // SR-005: on-time, late, and half-day boundaries
    // ==========================================================================
    #[test]
    fn test_sr_005_on_time_check_in_is_present() {
        let status = resolve_status(
            &DayKind::WorkingDay,
            &record_with_check_in("09:15:00"),
            &office_thresholds(),
        )
        .unwrap();
        assert_eq!(status, AttendanceStatus::Present);
    }

    #[test]
    fn test_sr_006_check_in_exactly_at_late_threshold_is_present() {
        // The comparison is strict: 10:30:00 sharp is not late.
        let status = resolve_status(
            &DayKind::WorkingDay,
            &record_with_check_in("10:30:00"),
            &office_thresholds(),
        )
        .unwrap();
        assert_eq!(status, AttendanceStatus::Present);
    }

    #[test]
    fn test_sr_007_check_in_past_late_threshold_is_late() {
        let status = resolve_status(
            &DayKind::WorkingDay,
            &record_with_check_in("10:31:00"),
            &office_thresholds(),
        )
        .unwrap();
        assert_eq!(status, AttendanceStatus::Late);
    }

    #[test]
    fn test_sr_008_check_in_exactly_at_half_day_threshold_is_late() {
        let status = resolve_status(
            &DayKind::WorkingDay,
            &record_with_check_in("11:00:00"),
            &office_thresholds(),
        )
        .unwrap();
        assert_eq!(status, AttendanceStatus::Late);
    }

    // ==========================================================================
    // SR-009: past both thresholds, the half-day bound decides
    // ==========================================================================
    #[test]
    fn test_sr_009_check_in_past_both_thresholds_is_half_day_not_late() {
        // 11:15 with late=10:30 and half-day=11:00 must resolve HalfDay.
        let status = resolve_status(
            &DayKind::WorkingDay,
            &record_with_check_in("11:15:00"),
            &office_thresholds(),
        )
        .unwrap();
        assert_eq!(status, AttendanceStatus::HalfDay);
    }

    // ==========================================================================
    // SR-010: unordered thresholds are a configuration error
    // ==========================================================================
    #[test]
    fn test_sr_010_unordered_thresholds_rejected() {
        let thresholds = AttendanceThresholds {
            late_after: make_time("11:00:00"),
            half_day_after: make_time("10:30:00"),
        };

        let result = resolve_status(
            &DayKind::WorkingDay,
            &record_with_check_in("09:00:00"),
            &thresholds,
        );

        match result {
            Err(EngineError::ThresholdOrdering {
                late_after,
                half_day_after,
            }) => {
                assert_eq!(late_after, make_time("11:00:00"));
                assert_eq!(half_day_after, make_time("10:30:00"));
            }
            _ => panic!("Expected ThresholdOrdering error"),
        }
    }

    #[test]
    fn test_equal_thresholds_are_valid() {
        // Equal thresholds collapse Late into HalfDay territory but stay ordered.
        let thresholds = AttendanceThresholds {
            late_after: make_time("10:30:00"),
            half_day_after: make_time("10:30:00"),
        };
        assert!(thresholds.validate().is_ok());

        let status = resolve_status(
            &DayKind::WorkingDay,
            &record_with_check_in("10:45:00"),
            &thresholds,
        )
        .unwrap();
        assert_eq!(status, AttendanceStatus::HalfDay);
    }

    #[test]
    fn test_missing_check_out_does_not_affect_status() {
        let mut record = record_with_check_in("09:00:00");
        record.check_out = None;

        let status =
            resolve_status(&DayKind::WorkingDay, &record, &office_thresholds()).unwrap();
        assert_eq!(status, AttendanceStatus::Present);
    }

    #[test]
    fn test_location_is_ignored() {
        let mut record = record_with_check_in("09:00:00");
        record.location = Some("remote".to_string());

        let status =
            resolve_status(&DayKind::WorkingDay, &record, &office_thresholds()).unwrap();
        assert_eq!(status, AttendanceStatus::Present);
    }

    #[test]
    fn test_thresholds_serialization_round_trip() {
        let thresholds = office_thresholds();
        let json = serde_json::to_string(&thresholds).unwrap();
        let deserialized: AttendanceThresholds = serde_json::from_str(&json).unwrap();
        assert_eq!(thresholds, deserialized);
    }
}
