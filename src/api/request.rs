//! Request types for the Payroll Calculation Engine API.
//!
//! This module defines the JSON request structures for the `/payroll`
//! endpoint.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{LeaveCategory, LeaveRecord};

/// Request body for the `/payroll` endpoint.
///
/// Contains all information needed to compute an employee's payroll for a
/// settlement period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// The employee information.
    pub employee: EmployeeRequest,
    /// The settlement period for the calculation.
    pub period: PeriodRequest,
    /// The leave records taken during (or around) the period.
    #[serde(default)]
    pub leaves: Vec<LeaveRequest>,
}

/// Employee information in a payroll request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// The base monthly salary.
    pub monthly_salary: Decimal,
}

/// Settlement period information in a payroll request.
///
/// Validated into a [`crate::models::Period`] by the handler, so an
/// out-of-range month is reported as a request error rather than a panic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodRequest {
    /// The settlement year.
    pub year: i32,
    /// The settlement month (1-12).
    pub month: u32,
}

/// Leave record information in a payroll request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// The date of the absence.
    pub date: NaiveDate,
    /// The leave category.
    pub category: LeaveCategory,
    /// Whether the leave was approved.
    #[serde(default)]
    pub approved: bool,
}

impl From<LeaveRequest> for LeaveRecord {
    fn from(req: LeaveRequest) -> Self {
        LeaveRecord {
            date: req.date,
            category: req.category,
            approved: req.approved,
        }
    }
}
