//! Error types for the Payroll Calculation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll calculation.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Payroll Calculation Engine.
///
/// All fallible operations in the engine return this error type. Every
/// variant is an input-validation failure raised at construction time;
/// the calculation itself has no failure modes of its own.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::InvalidPeriod { month: 13 };
/// assert_eq!(error.to_string(), "Invalid settlement month: 13 (expected 1-12)");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The settlement month was outside the 1-12 range.
    #[error("Invalid settlement month: {month} (expected 1-12)")]
    InvalidPeriod {
        /// The month value that was rejected.
        month: u32,
    },

    /// A salary amount was negative.
    #[error("Invalid salary amount: {amount} (must not be negative)")]
    InvalidAmount {
        /// The amount that was rejected.
        amount: Decimal,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
