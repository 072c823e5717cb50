//! HTTP request handlers for the Payroll Calculation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::rejection::JsonRejection,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_payroll;
use crate::error::EngineResult;
use crate::models::{LeaveRecord, Payroll, Period, Salary};

use super::request::PayrollRequest;
use super::response::{ApiError, ApiErrorResponse};

/// Creates the API router with all endpoints.
pub fn create_router() -> Router {
    Router::new().route("/payroll", post(payroll_handler))
}

/// Handler for POST /payroll endpoint.
///
/// Accepts a payroll request and returns the calculated payroll result.
async fn payroll_handler(
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
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
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Perform the calculation
    let start_time = Instant::now();
    match perform_calculation(&request) {
        Ok(payroll) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                employee_id = %payroll.employee_id,
                leaves_count = request.leaves.len(),
                amount = %payroll.amount,
                duration_us = duration.as_micros(),
                "Payroll calculated successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(payroll),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Payroll calculation failed"
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

/// Validates the request inputs and runs the payroll calculation.
fn perform_calculation(request: &PayrollRequest) -> EngineResult<Payroll> {
    let base_salary = Salary::of(request.employee.monthly_salary)?;
    let period = Period::new(request.period.year, request.period.month)?;
    let leaves: Vec<LeaveRecord> = request
        .leaves
        .iter()
        .cloned()
        .map(Into::into)
        .collect();

    Ok(calculate_payroll(
        &request.employee.id,
        &base_salary,
        &period,
        &leaves,
    ))
}
