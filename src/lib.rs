//! Payroll Calculation Engine
//!
//! This crate computes an employee's payroll amount for a monthly settlement
//! period. Leave taken during the period (sick, casual, paid, or disapproved)
//! is deducted from the base monthly salary according to a fixed per-category
//! deduction policy.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod error;
pub mod models;
