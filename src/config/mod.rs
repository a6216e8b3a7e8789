//! Configuration loading for the attendance engine.
//!
//! This module loads organization settings (attendance thresholds, the
//! working calendar, leave types, and holiday lists) from YAML files and
//! turns them into the immutable values the computation functions consume.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AttendanceConfig, CalendarConfig, HolidayCalendar, LeaveTypeEntry, LeaveTypesConfig,
    OrgConfig, OrganizationMetadata,
};
