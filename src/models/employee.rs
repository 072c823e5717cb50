//! Salaried-employee aggregate.
//!
//! This module defines the [`SalariedEmployee`] struct, the aggregate through
//! which callers holding an employee's salary and leave history request a
//! payroll for a settlement period.

use serde::{Deserialize, Serialize};

use crate::calculation::calculate_payroll;

use super::{LeaveRecord, Payroll, Period, Salary};

/// An employee paid a fixed monthly salary, together with the leave records
/// on file for them.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{Period, Salary, SalariedEmployee};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let salary = Salary::of(Decimal::from_str("10000.00").unwrap()).unwrap();
/// let employee = SalariedEmployee::new("emp200901011111", salary);
/// let period = Period::new(2019, 9).unwrap();
///
/// let payroll = employee.payroll(&period);
/// assert_eq!(payroll.amount, salary);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalariedEmployee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The base monthly salary.
    pub monthly_salary: Salary,
    /// Leave records on file. Records outside the requested period are
    /// ignored by the calculation.
    #[serde(default)]
    pub leaves: Vec<LeaveRecord>,
}

impl SalariedEmployee {
    /// Creates a new salaried employee with no leave records.
    pub fn new(id: impl Into<String>, monthly_salary: Salary) -> Self {
        Self {
            id: id.into(),
            monthly_salary,
            leaves: Vec::new(),
        }
    }

    /// Creates a new salaried employee with the given leave records.
    pub fn with_leaves(
        id: impl Into<String>,
        monthly_salary: Salary,
        leaves: Vec<LeaveRecord>,
    ) -> Self {
        Self {
            id: id.into(),
            monthly_salary,
            leaves,
        }
    }

    /// Computes the payroll for this employee over the given period.
    pub fn payroll(&self, period: &Period) -> Payroll {
        calculate_payroll(&self.id, &self.monthly_salary, period, &self.leaves)
    }
}
