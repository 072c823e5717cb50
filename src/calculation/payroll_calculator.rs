//! Payroll calculator.
//!
//! This module orchestrates the period, salary, and leave records through
//! the deduction policy to produce a [`Payroll`] result.

use crate::models::{LeaveRecord, Payroll, Period, Salary};

use super::{calculate_deduction, calculate_per_day_rate};

/// Calculates the payroll for one employee over one settlement period.
///
/// Leave records dated outside the period are ignored, not rejected. The
/// deduction is subtracted from the base salary with a zero floor. No state
/// is retained between calls; identical inputs produce identical results.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_payroll;
/// use payroll_engine::models::{Period, Salary};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let base = Salary::of(Decimal::from_str("10000.00").unwrap()).unwrap();
/// let period = Period::new(2019, 9).unwrap();
///
/// let payroll = calculate_payroll("emp200901011111", &base, &period, &[]);
/// assert_eq!(payroll.amount, base);
/// ```
pub fn calculate_payroll(
    employee_id: &str,
    base_salary: &Salary,
    period: &Period,
    leaves: &[LeaveRecord],
) -> Payroll {
    let filtered: Vec<LeaveRecord> = leaves
        .iter()
        .filter(|leave| period.contains(leave.date))
        .copied()
        .collect();

    let per_day_rate = calculate_per_day_rate(base_salary);
    let deduction = calculate_deduction(&per_day_rate, &filtered);
    let amount = base_salary.subtract(&deduction);

    Payroll::new(employee_id, period.begin_date(), period.end_date(), amount)
}
