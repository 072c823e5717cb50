//! Calculation logic for the Payroll Calculation Engine.
//!
//! This module contains the per-day rate derivation, the per-category
//! deduction policy, and the payroll calculator that orchestrates them.

mod deduction;
mod payroll_calculator;
mod per_day_rate;

pub use deduction::{calculate_deduction, deduction_multiplier, DISAPPROVED_PENALTY_MULTIPLIER};
pub use payroll_calculator::calculate_payroll;
pub use per_day_rate::{calculate_per_day_rate, MONTHLY_PAY_DIVISOR};
