//! Leave deduction policy.
//!
//! This module maps leave records to deduction amounts. The per-category
//! multiplier table is a static mapping; the rule set does not change at
//! runtime.

use rust_decimal::Decimal;

use crate::models::{LeaveCategory, LeaveRecord, Salary};

/// The penalty multiplier applied to any disapproved leave day.
///
/// A disapproved absence deducts twice the per-day rate, regardless of the
/// leave category it was filed under.
pub const DISAPPROVED_PENALTY_MULTIPLIER: Decimal = Decimal::TWO;

/// Returns the deduction multiplier for one leave day.
///
/// | category | approved | multiplier |
/// |----------|----------|------------|
/// | sick     | yes      | 1          |
/// | casual   | yes      | 1          |
/// | paid     | yes      | 0          |
/// | other    | yes      | 1          |
/// | any      | no       | 2          |
pub fn deduction_multiplier(category: LeaveCategory, approved: bool) -> Decimal {
    if !approved {
        return DISAPPROVED_PENALTY_MULTIPLIER;
    }
    match category {
        LeaveCategory::Paid => Decimal::ZERO,
        LeaveCategory::Sick | LeaveCategory::Casual | LeaveCategory::Other => Decimal::ONE,
    }
}

/// Computes the total deduction for a set of leave records.
///
/// Each leave is evaluated independently by its own category and approval
/// status, and the individual deductions are summed. Leaves are not
/// deduplicated by date and no cap is enforced; the caller's data integrity
/// is assumed. The function is pure and deterministic.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_deduction;
/// use payroll_engine::models::{LeaveCategory, LeaveRecord, Salary};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rate = Salary::of(Decimal::from_str("227.27").unwrap()).unwrap();
/// let leaves = vec![LeaveRecord::new(
///     NaiveDate::from_ymd_opt(2019, 9, 2).unwrap(),
///     LeaveCategory::Sick,
///     true,
/// )];
///
/// let deduction = calculate_deduction(&rate, &leaves);
/// assert_eq!(deduction, rate);
/// ```
pub fn calculate_deduction(per_day_rate: &Salary, leaves: &[LeaveRecord]) -> Salary {
    leaves
        .iter()
        .map(|leave| per_day_rate.multiply(deduction_multiplier(leave.category, leave.approved)))
        .fold(Salary::zero(), |total, deduction| total.add(&deduction))
}
