//! Calendar rule set and weekly-off policy models.
//!
//! This module contains the [`CalendarRuleSet`] value describing an
//! organization's working calendar: which weekdays are off (possibly
//! alternating by week-of-month), which dates are holidays, and which dates
//! are forced working days.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The weekly-off policy for a single weekday.
///
/// "Week 1" and "Week 2" partition a month into alternating 7-day blocks by
/// the parity of `ceil(day_of_month / 7)`. This matches the
/// alternate-Saturday convention of the source domain, not the ISO week
/// number.
///
/// # Example
///
/// ```
/// use attendance_engine::models::OffPolicy;
///
/// let policy = OffPolicy::Week1Only;
/// assert_eq!(format!("{:?}", policy), "Week1Only");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OffPolicy {
    /// The weekday is off in every week of the month.
    BothWeeks,
    /// The weekday is off in odd 7-day blocks (days 1-7, 15-21, 29-31).
    Week1Only,
    /// The weekday is off in even 7-day blocks (days 8-14, 22-28).
    Week2Only,
    /// The weekday is never off.
    NeverOff,
}

impl Default for OffPolicy {
    fn default() -> Self {
        OffPolicy::NeverOff
    }
}

/// The weekly-off policy for all seven weekdays.
///
/// One [`OffPolicy`] entry per weekday. The default is `NeverOff` for every
/// day, which makes an all-default policy classify every date a working day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WeeklyOffPolicy {
    /// Policy for Mondays.
    #[serde(default)]
    pub monday: OffPolicy,
    /// Policy for Tuesdays.
    #[serde(default)]
    pub tuesday: OffPolicy,
    /// Policy for Wednesdays.
    #[serde(default)]
    pub wednesday: OffPolicy,
    /// Policy for Thursdays.
    #[serde(default)]
    pub thursday: OffPolicy,
    /// Policy for Fridays.
    #[serde(default)]
    pub friday: OffPolicy,
    /// Policy for Saturdays.
    #[serde(default)]
    pub saturday: OffPolicy,
    /// Policy for Sundays.
    #[serde(default)]
    pub sunday: OffPolicy,
}

impl WeeklyOffPolicy {
    /// Returns the policy configured for the given weekday.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::models::{OffPolicy, WeeklyOffPolicy};
    /// use chrono::Weekday;
    ///
    /// let policy = WeeklyOffPolicy {
    ///     sunday: OffPolicy::BothWeeks,
    ///     ..WeeklyOffPolicy::default()
    /// };
    /// assert_eq!(policy.for_weekday(Weekday::Sun), OffPolicy::BothWeeks);
    /// assert_eq!(policy.for_weekday(Weekday::Mon), OffPolicy::NeverOff);
    /// ```
    pub fn for_weekday(&self, weekday: Weekday) -> OffPolicy {
        match weekday {
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat => self.saturday,
            Weekday::Sun => self.sunday,
        }
    }
}

/// A named holiday on a specific calendar date.
///
/// # Example
///
/// ```
/// use attendance_engine::models::Holiday;
/// use chrono::NaiveDate;
///
/// let holiday = Holiday {
///     date: NaiveDate::from_ymd_opt(2026, 1, 26).unwrap(),
///     name: "Republic Day".to_string(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The display name of the holiday.
    pub name: String,
}

/// Immutable per-organization calendar configuration.
///
/// Holds the weekly-off policy, the holiday list, and the explicit
/// working-day overrides (dates that would otherwise be off but are forced
/// working, such as a compensatory Saturday). The value is constructed once
/// per viewing context and passed explicitly into every computation; there
/// is no ambient or global lookup.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{CalendarRuleSet, Holiday, OffPolicy, WeeklyOffPolicy};
/// use chrono::NaiveDate;
///
/// let ruleset = CalendarRuleSet::new(
///     WeeklyOffPolicy {
///         sunday: OffPolicy::BothWeeks,
///         ..WeeklyOffPolicy::default()
///     },
///     vec![Holiday {
///         date: NaiveDate::from_ymd_opt(2026, 1, 26).unwrap(),
///         name: "Republic Day".to_string(),
///     }],
///     vec![],
/// ).unwrap();
///
/// let republic_day = NaiveDate::from_ymd_opt(2026, 1, 26).unwrap();
/// assert_eq!(ruleset.holiday_name(republic_day), Some("Republic Day"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarRuleSet {
    /// Weekly-off policy per weekday.
    weekly_off: WeeklyOffPolicy,
    /// Holiday dates with their names, keyed by exact calendar date.
    holidays: BTreeMap<NaiveDate, String>,
    /// Dates forced to be working days regardless of weekly-off policy.
    working_day_overrides: BTreeSet<NaiveDate>,
}

impl CalendarRuleSet {
    /// Creates a validated calendar rule set.
    ///
    /// A date listed both as a holiday and as a working-day override has no
    /// defined precedence and is rejected with
    /// [`EngineError::OverrideHolidayConflict`] rather than silently
    /// resolved. A date listed twice in `holidays` keeps the last name.
    ///
    /// # Arguments
    ///
    /// * `weekly_off` - The per-weekday off policy
    /// * `holidays` - The holiday list
    /// * `working_day_overrides` - Dates forced to be working days
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OverrideHolidayConflict`] when any date
    /// appears in both `holidays` and `working_day_overrides`.
    pub fn new(
        weekly_off: WeeklyOffPolicy,
        holidays: Vec<Holiday>,
        working_day_overrides: Vec<NaiveDate>,
    ) -> EngineResult<Self> {
        let holidays: BTreeMap<NaiveDate, String> =
            holidays.into_iter().map(|h| (h.date, h.name)).collect();
        let working_day_overrides: BTreeSet<NaiveDate> =
            working_day_overrides.into_iter().collect();

        if let Some(date) = working_day_overrides
            .iter()
            .find(|d| holidays.contains_key(*d))
        {
            return Err(EngineError::OverrideHolidayConflict { date: *date });
        }

        Ok(Self {
            weekly_off,
            holidays,
            working_day_overrides,
        })
    }

    /// Returns an empty rule set that classifies every date a working day.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::models::CalendarRuleSet;
    /// use chrono::NaiveDate;
    ///
    /// let ruleset = CalendarRuleSet::empty();
    /// let date = NaiveDate::from_ymd_opt(2026, 1, 4).unwrap(); // a Sunday
    /// assert!(ruleset.holiday_name(date).is_none());
    /// ```
    pub fn empty() -> Self {
        Self {
            weekly_off: WeeklyOffPolicy::default(),
            holidays: BTreeMap::new(),
            working_day_overrides: BTreeSet::new(),
        }
    }

    /// Returns the holiday name for a date, if the date is a holiday.
    pub fn holiday_name(&self, date: NaiveDate) -> Option<&str> {
        self.holidays.get(&date).map(String::as_str)
    }

    /// Returns true if the date is an explicit working-day override.
    pub fn is_working_day_override(&self, date: NaiveDate) -> bool {
        self.working_day_overrides.contains(&date)
    }

    /// Returns the weekly-off policy.
    pub fn weekly_off(&self) -> &WeeklyOffPolicy {
        &self.weekly_off
    }
}
