//! Settlement period model.
//!
//! This module contains the [`Period`] type representing the calendar month
//! for which payroll is computed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A settlement period covering one calendar month.
///
/// The period derives its begin and end dates (inclusive) from the year and
/// month, accounting for month length and leap years. It is immutable and
/// constructed once per calculation.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Period;
/// use chrono::NaiveDate;
///
/// let period = Period::new(2019, 9).unwrap();
/// assert_eq!(period.begin_date(), NaiveDate::from_ymd_opt(2019, 9, 1).unwrap());
/// assert_eq!(period.end_date(), NaiveDate::from_ymd_opt(2019, 9, 30).unwrap());
/// assert_eq!(period.day_count(), 30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    year: i32,
    month: u32,
    begin_date: NaiveDate,
    end_date: NaiveDate,
}

impl Period {
    /// Creates a period for the given year and month.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPeriod`] if `month` is outside the
    /// 1-12 range or the dates cannot be represented.
    pub fn new(year: i32, month: u32) -> EngineResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(EngineError::InvalidPeriod { month });
        }

        let begin_date = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(EngineError::InvalidPeriod { month })?;
        // Last day of the month: first day of the next month, minus one day.
        let end_date = begin_date
            .checked_add_months(chrono::Months::new(1))
            .and_then(|d| d.pred_opt())
            .ok_or(EngineError::InvalidPeriod { month })?;

        Ok(Self {
            year,
            month,
            begin_date,
            end_date,
        })
    }

    /// Returns the year of this period.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month of this period (1-12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns the first day of the period.
    pub fn begin_date(&self) -> NaiveDate {
        self.begin_date
    }

    /// Returns the last day of the period (inclusive).
    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Returns the number of calendar days in the period.
    pub fn day_count(&self) -> u32 {
        (self.end_date - self.begin_date).num_days() as u32 + 1
    }

    /// Checks if a given date falls within this period.
    ///
    /// The check is inclusive of both begin and end dates.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::Period;
    /// use chrono::NaiveDate;
    ///
    /// let period = Period::new(2019, 9).unwrap();
    /// assert!(period.contains(NaiveDate::from_ymd_opt(2019, 9, 1).unwrap()));
    /// assert!(period.contains(NaiveDate::from_ymd_opt(2019, 9, 30).unwrap()));
    /// assert!(!period.contains(NaiveDate::from_ymd_opt(2019, 10, 1).unwrap()));
    /// ```
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.begin_date && date <= self.end_date
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
