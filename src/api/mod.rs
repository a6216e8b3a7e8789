//! HTTP API module for the attendance engine.
//!
//! This module provides the REST endpoints the admin portal's reporting
//! widgets call: monthly attendance summaries and leave balances. The
//! handlers are thin adapters over the pure calculation functions.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AttendanceRecordRequest, LeaveBalanceRequest, LeaveRequestRequest, MonthSummaryRequest,
};
pub use response::ApiError;
pub use state::AppState;
