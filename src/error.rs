//! Error types for the attendance engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during calendar classification,
//! attendance resolution, and leave accounting.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use crate::models::RequestStatus;

/// The main error type for the attendance engine.
///
/// All fallible operations in the engine return this error type. Every
/// variant is recoverable at the caller: the engine never crashes the host
/// process, it returns a typed failure the caller surfaces to the user.
///
/// # Example
///
/// ```
/// use attendance_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The half-day threshold is earlier than the late threshold.
    ///
    /// The thresholds must be totally ordered or a check-in past both
    /// could not be classified unambiguously.
    #[error("Half-day time {half_day_after} must not be earlier than late time {late_after}")]
    ThresholdOrdering {
        /// The configured late threshold.
        late_after: NaiveTime,
        /// The configured half-day threshold.
        half_day_after: NaiveTime,
    },

    /// A date appears both as a holiday and as a working-day override.
    ///
    /// The precedence between the two is undefined, so the ruleset is
    /// rejected instead of silently resolving the conflict.
    #[error("Date {date} is both a holiday and a working-day override")]
    OverrideHolidayConflict {
        /// The conflicting date.
        date: NaiveDate,
    },

    /// A leave request's end date precedes its start date.
    #[error("Invalid date range: {to} is before {from}")]
    InvalidDateRange {
        /// The start of the range.
        from: NaiveDate,
        /// The end of the range.
        to: NaiveDate,
    },

    /// A leave request references a leave type not in the active set.
    #[error("Unknown leave type: {id}")]
    UnknownLeaveType {
        /// The leave-type id that was not found or is inactive.
        id: String,
    },

    /// The month/year pair does not name a real calendar month.
    #[error("Invalid month {month} for year {year}")]
    InvalidMonth {
        /// The month number (1-12 expected).
        month: u32,
        /// The calendar year.
        year: i32,
    },

    /// A leave request was approved or rejected more than once.
    #[error("Leave request is already {status} and cannot transition again")]
    RequestAlreadyDecided {
        /// The terminal status the request already holds.
        status: RequestStatus,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/file.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/file.yaml"
        );
    }

    #[test]
    fn test_threshold_ordering_displays_both_times() {
        let error = EngineError::ThresholdOrdering {
            late_after: NaiveTime::from_hms_opt(10, 30, 0).unwrap(),
            half_day_after: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Half-day time 10:00:00 must not be earlier than late time 10:30:00"
        );
    }

    #[test]
    fn test_override_holiday_conflict_displays_date() {
        let error = EngineError::OverrideHolidayConflict {
            date: NaiveDate::from_ymd_opt(2026, 1, 26).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Date 2026-01-26 is both a holiday and a working-day override"
        );
    }

    #[test]
    fn test_invalid_date_range_displays_both_dates() {
        let error = EngineError::InvalidDateRange {
            from: NaiveDate::from_ymd_opt(2026, 3, 10).unwrap(),
            to: NaiveDate::from_ymd_opt(2026, 3, 8).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date range: 2026-03-08 is before 2026-03-10"
        );
    }

    #[test]
    fn test_unknown_leave_type_displays_id() {
        let error = EngineError::UnknownLeaveType {
            id: "sabbatical".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown leave type: sabbatical");
    }

    #[test]
    fn test_invalid_month_displays_month_and_year() {
        let error = EngineError::InvalidMonth {
            month: 13,
            year: 2026,
        };
        assert_eq!(error.to_string(), "Invalid month 13 for year 2026");
    }

    #[test]
    fn test_request_already_decided_displays_status() {
        let error = EngineError::RequestAlreadyDecided {
            status: RequestStatus::Approved,
        };
        assert_eq!(
            error.to_string(),
            "Leave request is already approved and cannot transition again"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_unknown_leave_type() -> EngineResult<()> {
            Err(EngineError::UnknownLeaveType {
                id: "test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_unknown_leave_type()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
