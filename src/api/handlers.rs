//! HTTP request handlers for the attendance engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{aggregate_month, remaining_balance, validate_request};
use crate::models::{AttendanceRecord, AttendanceReport, LeaveBalance, LeaveRequest};

use super::request::{LeaveBalanceRequest, MonthSummaryRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/attendance/summary", post(summary_handler))
        .route("/leave/balance", post(balance_handler))
        .with_state(state)
}

/// Turns a JSON extraction rejection into an error response.
fn rejection_to_error(correlation_id: Uuid, rejection: JsonRejection) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Handler for POST /attendance/summary.
///
/// Accepts an employee's raw records for a month and returns the computed
/// attendance report.
async fn summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<MonthSummaryRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing attendance summary request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let records: Vec<AttendanceRecord> =
        request.records.into_iter().map(Into::into).collect();

    let config = state.config();
    let start_time = Instant::now();

    let result = config
        .ruleset_for(request.year)
        .and_then(|ruleset| {
            let thresholds = config.thresholds()?;
            aggregate_month(
                &request.employee_id,
                request.month,
                request.year,
                &ruleset,
                &thresholds,
                &records,
            )
        });

    match result {
        Ok(summary) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                employee_id = %summary.employee_id,
                working_days = summary.working_days,
                present_percentage = %summary.present_percentage,
                duration_us = duration.as_micros(),
                "Summary computed successfully"
            );
            let report = AttendanceReport {
                report_id: Uuid::new_v4(),
                generated_at: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                summary,
            };
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(report),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Summary computation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for POST /leave/balance.
///
/// Accepts an employee's leave requests and returns the remaining balance
/// for one leave type.
async fn balance_handler(
    State(state): State<AppState>,
    payload: Result<Json<LeaveBalanceRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing leave balance request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_error(correlation_id, rejection);
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let requests: Vec<LeaveRequest> =
        request.requests.into_iter().map(Into::into).collect();

    let config = state.config();

    let result = config.get_leave_type(&request.leave_type_id).and_then(|leave_type| {
        for leave_request in &requests {
            validate_request(leave_request, config.leave_types())?;
        }
        Ok(LeaveBalance {
            employee_id: request.employee_id.clone(),
            leave_type_id: leave_type.id.clone(),
            year: request.year,
            remaining: remaining_balance(
                &request.employee_id,
                leave_type,
                &requests,
                request.year,
            ),
        })
    });

    match result {
        Ok(balance) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %balance.employee_id,
                leave_type_id = %balance.leave_type_id,
                "Balance computed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(balance),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Balance computation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}
