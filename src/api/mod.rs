//! HTTP API module for the Payroll Calculation Engine.
//!
//! This module provides the REST API endpoint for computing an employee's
//! payroll for a settlement period.

mod handlers;
mod request;
mod response;

pub use handlers::create_router;
pub use request::PayrollRequest;
pub use response::ApiError;
