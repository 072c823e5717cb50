//! Leave record model and related types.
//!
//! This module defines the [`LeaveRecord`] struct and [`LeaveCategory`] enum
//! for representing dated absences within a settlement period.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The category of a leave record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveCategory {
    /// Sick leave.
    Sick,
    /// Casual leave.
    Casual,
    /// Paid leave (annual leave and similar entitlements).
    Paid,
    /// Any other absence.
    Other,
}

/// A dated absence tagged with a category and an approval status.
///
/// Leave records are created by the caller before invoking the calculator
/// and are never mutated. Approval state is an input here, not computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRecord {
    /// The date of the absence.
    pub date: NaiveDate,
    /// The leave category.
    pub category: LeaveCategory,
    /// Whether the leave was approved.
    pub approved: bool,
}

impl LeaveRecord {
    /// Creates a new leave record.
    pub fn new(date: NaiveDate, category: LeaveCategory, approved: bool) -> Self {
        Self {
            date,
            category,
            approved,
        }
    }
}
