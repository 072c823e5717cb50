//! Payroll result model.
//!
//! This module contains the [`Payroll`] type, the immutable output of a
//! payroll calculation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Salary;

/// The result of a payroll calculation for one employee and one period.
///
/// A payroll is constructed exactly once per calculation and never mutated
/// afterwards. Its fields are consumed by reporting and persistence
/// collaborators outside this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payroll {
    /// The identifier of the employee the payroll belongs to.
    pub employee_id: String,
    /// The first day of the settlement period.
    pub begin_date: NaiveDate,
    /// The last day of the settlement period (inclusive).
    pub end_date: NaiveDate,
    /// The final payroll amount after deductions.
    pub amount: Salary,
}

impl Payroll {
    /// Creates a new payroll result.
    pub fn new(
        employee_id: impl Into<String>,
        begin_date: NaiveDate,
        end_date: NaiveDate,
        amount: Salary,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            begin_date,
            end_date,
            amount,
        }
    }
}
