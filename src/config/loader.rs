//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading organization
//! configuration from YAML files.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::calculation::AttendanceThresholds;
use crate::error::{EngineError, EngineResult};
use crate::models::{CalendarRuleSet, LeaveType};

use super::types::{
    AttendanceConfig, CalendarConfig, HolidayCalendar, LeaveTypesConfig, OrgConfig,
    OrganizationMetadata,
};

/// Loads and provides access to an organization configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// provides methods to build calendar rule sets, attendance thresholds,
/// and the leave-type set for the computation functions.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/default/
/// ├── organization.yaml  # Organization metadata
/// ├── attendance.yaml    # Late/half-day times, check-in locations
/// ├── calendar.yaml      # Weekly-off policy, working-day overrides
/// ├── leave_types.yaml   # Leave-type reference data
/// └── holidays/
///     └── 2026.yaml      # Holidays for this calendar year
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
///
/// // Build the rule set for a viewing context
/// let ruleset = loader.ruleset_for(2026).unwrap();
///
/// // Get the validated thresholds
/// let thresholds = loader.thresholds().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: OrgConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/default")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The attendance thresholds are not ordered
    ///
    /// # Example
    ///
    /// ```no_run
    /// use attendance_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// # Ok::<(), attendance_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        // Load organization.yaml
        let organization_path = path.join("organization.yaml");
        let metadata = Self::load_yaml::<OrganizationMetadata>(&organization_path)?;

        // Load attendance.yaml
        let attendance_path = path.join("attendance.yaml");
        let attendance = Self::load_yaml::<AttendanceConfig>(&attendance_path)?;

        // Load calendar.yaml
        let calendar_path = path.join("calendar.yaml");
        let calendar = Self::load_yaml::<CalendarConfig>(&calendar_path)?;

        // Load leave_types.yaml
        let leave_types_path = path.join("leave_types.yaml");
        let leave_types_config = Self::load_yaml::<LeaveTypesConfig>(&leave_types_path)?;
        let leave_types: HashMap<String, LeaveType> = leave_types_config
            .leave_types
            .into_iter()
            .map(|(id, entry)| {
                let leave_type = LeaveType {
                    id: id.clone(),
                    name: entry.name,
                    annual_allowance: entry.annual_allowance,
                    requires_supporting_document: entry.requires_supporting_document,
                    is_active: entry.is_active,
                };
                (id, leave_type)
            })
            .collect();

        // Load all holiday files from the holidays directory
        let holidays_dir = path.join("holidays");
        let holiday_calendars = Self::load_holidays(&holidays_dir)?;

        let config = OrgConfig::new(
            metadata,
            attendance,
            calendar,
            leave_types,
            holiday_calendars,
        );

        let loader = Self { config };

        // Reject unordered thresholds at the edge, before any computation runs.
        loader.thresholds()?;

        Ok(loader)
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads all holiday files from the holidays directory.
    ///
    /// The directory must exist; an organization with no holidays keeps it
    /// empty rather than deleting it.
    fn load_holidays(holidays_dir: &Path) -> EngineResult<Vec<HolidayCalendar>> {
        let holidays_dir_str = holidays_dir.display().to_string();

        if !holidays_dir.exists() {
            return Err(EngineError::ConfigNotFound {
                path: holidays_dir_str,
            });
        }

        let entries = fs::read_dir(holidays_dir).map_err(|_| EngineError::ConfigNotFound {
            path: holidays_dir_str.clone(),
        })?;

        let mut calendars = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: holidays_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let calendar = Self::load_yaml::<HolidayCalendar>(&path)?;
                calendars.push(calendar);
            }
        }

        Ok(calendars)
    }

    /// Returns the underlying organization configuration.
    pub fn config(&self) -> &OrgConfig {
        &self.config
    }

    /// Returns the validated attendance thresholds.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ThresholdOrdering`] when the configured
    /// half-day time is earlier than the late time. This is the "cannot
    /// save: half-day time must be after late time" rejection surfaced to
    /// the settings form.
    pub fn thresholds(&self) -> EngineResult<AttendanceThresholds> {
        let attendance = self.config.attendance();
        let thresholds = AttendanceThresholds {
            late_after: attendance.late_time,
            half_day_after: attendance.half_day_time,
        };
        thresholds.validate()?;
        Ok(thresholds)
    }

    /// Builds the calendar rule set for a viewing year.
    ///
    /// Combines the weekly-off policy and working-day overrides with the
    /// holidays configured for that year. A year with no holiday file
    /// yields a rule set without holidays.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::OverrideHolidayConflict`] when an override
    /// date collides with a holiday.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use attendance_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// let ruleset = loader.ruleset_for(2026)?;
    /// # Ok::<(), attendance_engine::error::EngineError>(())
    /// ```
    pub fn ruleset_for(&self, year: i32) -> EngineResult<CalendarRuleSet> {
        CalendarRuleSet::new(
            self.config.calendar().weekly_off,
            self.config.holidays_for(year).to_vec(),
            self.config.calendar().working_day_overrides.clone(),
        )
    }

    /// Returns the leave types keyed by id.
    pub fn leave_types(&self) -> &HashMap<String, LeaveType> {
        self.config.leave_types()
    }

    /// Gets a leave type by its id.
    ///
    /// # Arguments
    ///
    /// * `id` - The leave-type id (e.g., "casual_leave")
    ///
    /// # Returns
    ///
    /// Returns the leave type if present, or `UnknownLeaveType`.
    pub fn get_leave_type(&self, id: &str) -> EngineResult<&LeaveType> {
        self.config
            .leave_types()
            .get(id)
            .ok_or_else(|| EngineError::UnknownLeaveType { id: id.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LeaveAllowance, OffPolicy};
    use chrono::{NaiveDate, NaiveTime, Weekday};

    fn config_path() -> &'static str {
        "./config/default"
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.config().organization().code, "acme");
        assert_eq!(loader.config().organization().name, "Acme Industries");
    }

    #[test]
    fn test_thresholds_loaded_and_ordered() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let thresholds = loader.thresholds().unwrap();

        assert_eq!(
            thresholds.late_after,
            NaiveTime::from_hms_opt(10, 30, 0).unwrap()
        );
        assert_eq!(
            thresholds.half_day_after,
            NaiveTime::from_hms_opt(11, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_weekly_off_policy_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let weekly_off = loader.config().calendar().weekly_off;

        assert_eq!(weekly_off.for_weekday(Weekday::Sun), OffPolicy::BothWeeks);
        assert_eq!(weekly_off.for_weekday(Weekday::Sat), OffPolicy::Week1Only);
        assert_eq!(weekly_off.for_weekday(Weekday::Mon), OffPolicy::NeverOff);
    }

    #[test]
    fn test_ruleset_for_configured_year_has_holidays() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let ruleset = loader.ruleset_for(2026).unwrap();

        assert_eq!(
            ruleset.holiday_name(make_date("2026-01-26")),
            Some("Republic Day")
        );
    }

    #[test]
    fn test_ruleset_for_unconfigured_year_has_no_holidays() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let ruleset = loader.ruleset_for(1999).unwrap();

        assert!(ruleset.holiday_name(make_date("1999-01-26")).is_none());
    }

    #[test]
    fn test_get_leave_type() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let casual = loader.get_leave_type("casual_leave").unwrap();
        assert_eq!(casual.name, "Casual Leave");
        assert_eq!(casual.annual_allowance, LeaveAllowance::FiniteDays(12));
        assert!(casual.is_active);

        let unpaid = loader.get_leave_type("unpaid_leave").unwrap();
        assert_eq!(unpaid.annual_allowance, LeaveAllowance::Unlimited);
    }

    #[test]
    fn test_get_leave_type_unknown_returns_error() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        match loader.get_leave_type("sabbatical") {
            Err(EngineError::UnknownLeaveType { id }) => assert_eq!(id, "sabbatical"),
            _ => panic!("Expected UnknownLeaveType error"),
        }
    }

    #[test]
    fn test_sick_leave_requires_document() {
        let loader = ConfigLoader::load(config_path()).unwrap();

        let sick = loader.get_leave_type("sick_leave").unwrap();
        assert!(sick.requires_supporting_document);
    }

    #[test]
    fn test_working_day_overrides_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let ruleset = loader.ruleset_for(2026).unwrap();

        assert!(ruleset.is_working_day_override(make_date("2026-03-07")));
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");
        assert!(result.is_err());

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("organization.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }
}
