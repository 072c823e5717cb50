//! Per-day rate derivation.
//!
//! This module derives the per-day deduction rate from a base monthly
//! salary using the scheme's fixed settlement divisor.

use crate::models::Salary;

/// The fixed divisor used to derive the per-day rate from a monthly salary.
///
/// The settlement scheme divides every monthly salary by a flat 44 rather
/// than the calendar day count of the month, so the per-day rate is stable
/// across months of different lengths.
pub const MONTHLY_PAY_DIVISOR: u32 = 44;

/// Derives the per-day deduction rate for a base monthly salary.
///
/// The rate is the monthly salary divided by [`MONTHLY_PAY_DIVISOR`],
/// rounded to two decimal places (round-half-up).
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_per_day_rate;
/// use payroll_engine::models::Salary;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let base = Salary::of(Decimal::from_str("10000.00").unwrap()).unwrap();
/// let rate = calculate_per_day_rate(&base);
/// assert_eq!(rate.amount(), Decimal::from_str("227.27").unwrap());
/// ```
pub fn calculate_per_day_rate(base_salary: &Salary) -> Salary {
    base_salary.per_day_rate(MONTHLY_PAY_DIVISOR)
}
