//! Day classification logic.
//!
//! This module provides the pure classifier mapping a calendar date and a
//! [`CalendarRuleSet`] to a [`DayKind`]: holiday, weekly off, or working
//! day. No per-employee data is involved.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{CalendarRuleSet, OffPolicy};

/// The kind of calendar day, as determined by organizational policy.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::DayKind;
///
/// let kind = DayKind::Holiday("Republic Day".to_string());
/// assert_ne!(kind, DayKind::WorkingDay);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    /// An organizational holiday, with its display name.
    Holiday(String),
    /// A weekly off per the weekly-off policy.
    WeeklyOff,
    /// A day requiring attendance.
    WorkingDay,
}

impl std::fmt::Display for DayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayKind::Holiday(name) => write!(f, "Holiday({})", name),
            DayKind::WeeklyOff => write!(f, "WeeklyOff"),
            DayKind::WorkingDay => write!(f, "WorkingDay"),
        }
    }
}

/// Returns the 7-day block of the month a date falls in, counted from 1.
///
/// Computed as `ceil(day_of_month / 7)`: days 1-7 are block 1, days 8-14
/// block 2, up to block 5 for days 29-31. Odd blocks are "week 1" and even
/// blocks "week 2" for the alternating weekly-off policies.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::week_of_month;
/// use chrono::NaiveDate;
///
/// assert_eq!(week_of_month(NaiveDate::from_ymd_opt(2026, 1, 7).unwrap()), 1);
/// assert_eq!(week_of_month(NaiveDate::from_ymd_opt(2026, 1, 8).unwrap()), 2);
/// assert_eq!(week_of_month(NaiveDate::from_ymd_opt(2026, 1, 31).unwrap()), 5);
/// ```
pub fn week_of_month(date: NaiveDate) -> u32 {
    date.day().div_ceil(7)
}

/// Classifies a calendar date under a rule set.
///
/// The function is total over any valid calendar date and any well-formed
/// rule set; an empty rule set classifies every day [`DayKind::WorkingDay`].
///
/// # Precedence
///
/// 1. A holiday date returns `Holiday(name)`.
/// 2. A working-day override returns `WorkingDay` regardless of weekly-off
///    policy. (A validated rule set never holds a date that is both a
///    holiday and an override.)
/// 3. The weekly-off policy for the date's weekday decides:
///    `NeverOff` is working, `BothWeeks` is off, `Week1Only` is off in odd
///    7-day blocks and `Week2Only` in even ones.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::{classify_day, DayKind};
/// use attendance_engine::models::{CalendarRuleSet, OffPolicy, WeeklyOffPolicy};
/// use chrono::NaiveDate;
///
/// let ruleset = CalendarRuleSet::new(
///     WeeklyOffPolicy {
///         sunday: OffPolicy::BothWeeks,
///         ..WeeklyOffPolicy::default()
///     },
///     vec![],
///     vec![],
/// ).unwrap();
///
/// // 2026-01-04 is a Sunday
/// let sunday = NaiveDate::from_ymd_opt(2026, 1, 4).unwrap();
/// assert_eq!(classify_day(sunday, &ruleset), DayKind::WeeklyOff);
///
/// // 2026-01-05 is a Monday
/// let monday = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
/// assert_eq!(classify_day(monday, &ruleset), DayKind::WorkingDay);
/// ```
pub fn classify_day(date: NaiveDate, ruleset: &CalendarRuleSet) -> DayKind {
    if let Some(name) = ruleset.holiday_name(date) {
        return DayKind::Holiday(name.to_string());
    }

    if ruleset.is_working_day_override(date) {
        return DayKind::WorkingDay;
    }

    let policy = ruleset.weekly_off().for_weekday(date.weekday());
    let week = week_of_month(date);

    match policy {
        OffPolicy::NeverOff => DayKind::WorkingDay,
        OffPolicy::BothWeeks => DayKind::WeeklyOff,
        OffPolicy::Week1Only => {
            if week % 2 == 1 {
                DayKind::WeeklyOff
            } else {
                DayKind::WorkingDay
            }
        }
        OffPolicy::Week2Only => {
            if week % 2 == 0 {
                DayKind::WeeklyOff
            } else {
                DayKind::WorkingDay
            }
        }
    }
}
