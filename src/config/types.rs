//! Configuration types for the attendance engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML files of an organization configuration
//! directory.

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

use crate::models::{Holiday, LeaveType, WeeklyOffPolicy};

/// Metadata about the organization.
#[derive(Debug, Clone, Deserialize)]
pub struct OrganizationMetadata {
    /// Short code identifying the organization (e.g., "acme").
    pub code: String,
    /// The human-readable organization name.
    pub name: String,
}

/// Attendance settings from attendance.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceConfig {
    /// Check-ins strictly after this time are late.
    pub late_time: NaiveTime,
    /// Check-ins strictly after this time count as half days.
    pub half_day_time: NaiveTime,
    /// Locations offered in the check-in form. Display-only.
    #[serde(default)]
    pub location_options: Vec<String>,
}

/// Working-calendar settings from calendar.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarConfig {
    /// The weekly-off policy, one entry per weekday.
    pub weekly_off: WeeklyOffPolicy,
    /// Dates forced to be working days (e.g., a compensatory Saturday).
    #[serde(default)]
    pub working_day_overrides: Vec<NaiveDate>,
}

/// Leave-type reference data from leave_types.yaml.
#[derive(Debug, Clone, Deserialize)]
pub struct LeaveTypesConfig {
    /// Map of leave-type id to its definition.
    pub leave_types: HashMap<String, LeaveTypeEntry>,
}

/// One leave-type entry as written in leave_types.yaml.
///
/// The id lives in the map key; [`super::ConfigLoader`] folds key and
/// entry into a full [`LeaveType`].
#[derive(Debug, Clone, Deserialize)]
pub struct LeaveTypeEntry {
    /// The display name of the leave type.
    pub name: String,
    /// The annual allowance, finite or unlimited.
    pub annual_allowance: crate::models::LeaveAllowance,
    /// Whether a request of this type needs a supporting document.
    #[serde(default)]
    pub requires_supporting_document: bool,
    /// Whether the type is currently offered to employees.
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

/// A per-year holiday file from the holidays directory.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayCalendar {
    /// The calendar year the file covers.
    pub year: i32,
    /// The holidays of that year.
    #[serde(default)]
    pub holidays: Vec<Holiday>,
}

/// The complete organization configuration loaded from YAML files.
///
/// This struct aggregates all configuration loaded from the files in an
/// organization configuration directory.
#[derive(Debug, Clone)]
pub struct OrgConfig {
    /// Organization metadata.
    metadata: OrganizationMetadata,
    /// Attendance thresholds and check-in options.
    attendance: AttendanceConfig,
    /// Weekly-off policy and working-day overrides.
    calendar: CalendarConfig,
    /// Leave types keyed by id.
    leave_types: HashMap<String, LeaveType>,
    /// Holiday calendars keyed by year.
    holidays: HashMap<i32, Vec<Holiday>>,
}

impl OrgConfig {
    /// Creates a new OrgConfig from its component parts.
    pub fn new(
        metadata: OrganizationMetadata,
        attendance: AttendanceConfig,
        calendar: CalendarConfig,
        leave_types: HashMap<String, LeaveType>,
        holiday_calendars: Vec<HolidayCalendar>,
    ) -> Self {
        let mut holidays: HashMap<i32, Vec<Holiday>> = HashMap::new();
        for calendar_file in holiday_calendars {
            holidays
                .entry(calendar_file.year)
                .or_default()
                .extend(calendar_file.holidays);
        }
        Self {
            metadata,
            attendance,
            calendar,
            leave_types,
            holidays,
        }
    }

    /// Returns the organization metadata.
    pub fn organization(&self) -> &OrganizationMetadata {
        &self.metadata
    }

    /// Returns the attendance settings.
    pub fn attendance(&self) -> &AttendanceConfig {
        &self.attendance
    }

    /// Returns the working-calendar settings.
    pub fn calendar(&self) -> &CalendarConfig {
        &self.calendar
    }

    /// Returns the leave types keyed by id.
    pub fn leave_types(&self) -> &HashMap<String, LeaveType> {
        &self.leave_types
    }

    /// Returns the holidays configured for a year, empty when none.
    pub fn holidays_for(&self, year: i32) -> &[Holiday] {
        self.holidays.get(&year).map(Vec::as_slice).unwrap_or(&[])
    }
}
