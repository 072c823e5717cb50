//! Core data models for the Payroll Calculation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod leave;
mod payroll;
mod period;
mod salary;

pub use employee::SalariedEmployee;
pub use leave::{LeaveCategory, LeaveRecord};
pub use payroll::Payroll;
pub use period::Period;
pub use salary::Salary;
