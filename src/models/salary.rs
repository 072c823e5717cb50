//! Fixed-point salary value type.
//!
//! This module contains the [`Salary`] type, a non-negative monetary value
//! with two-decimal rounding rules for derived amounts.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A non-negative monetary amount with fixed-point semantics.
///
/// All derived amounts (per-day rates, multiplied deductions) are rounded to
/// two decimal places using round-half-up. Equality is by exact decimal
/// value, never by floating-point tolerance.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Salary;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let salary = Salary::of(Decimal::from_str("10000.00").unwrap()).unwrap();
/// let rate = salary.per_day_rate(44);
/// assert_eq!(rate, Salary::of(Decimal::from_str("227.27").unwrap()).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Salary(Decimal);

impl Salary {
    /// Creates a salary from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidAmount`] if the amount is negative.
    pub fn of(amount: Decimal) -> EngineResult<Self> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(EngineError::InvalidAmount { amount });
        }
        Ok(Self(amount))
    }

    /// Returns a zero salary.
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Returns the underlying decimal amount.
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Divides the salary by a working-day count to produce a per-day rate.
    ///
    /// The result is rounded to two decimal places, round-half-up.
    pub fn per_day_rate(&self, working_days: u32) -> Self {
        let rate = self.0 / Decimal::from(working_days);
        Self(round_to_cents(rate))
    }

    /// Adds another salary to this one.
    pub fn add(&self, other: &Salary) -> Self {
        Self(self.0 + other.0)
    }

    /// Subtracts another salary from this one, clamping at zero.
    ///
    /// A payroll amount can never go negative: when the deduction exceeds
    /// the base amount, the result is a zero salary.
    pub fn subtract(&self, other: &Salary) -> Self {
        if other.0 >= self.0 {
            Self::zero()
        } else {
            Self(self.0 - other.0)
        }
    }

    /// Multiplies the salary by a decimal factor.
    ///
    /// The result is rounded to two decimal places, round-half-up.
    pub fn multiply(&self, factor: Decimal) -> Self {
        Self(round_to_cents(self.0 * factor))
    }
}

impl std::fmt::Display for Salary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rounds a decimal to two fractional digits, round-half-up.
fn round_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
