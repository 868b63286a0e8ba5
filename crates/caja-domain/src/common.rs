//! Shared traits, labels, and the reporting date range.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Category label marking an expense paid personally by a member, pending
/// repayment by the collective.
pub const REIMBURSEMENT_CATEGORY: &str = "Uno de nosotros";

/// Fallback label for reimbursement expenses recorded without a person name.
pub const UNNAMED_PERSON_LABEL: &str = "Sin nombre";

/// Comment marker identifying a till-float income entry. Matched as a
/// case-insensitive substring.
pub const FLOAT_COMMENT_MARKER: &str = "cambio inicial";

/// Exposes the calendar day an entry belongs to.
pub trait Dated {
    fn date(&self) -> NaiveDate;
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Inclusive date window selected for reporting.
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Window covering exactly one calendar day.
    pub fn single_day(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, d).unwrap()
    }

    #[test]
    fn range_is_inclusive_on_both_ends() {
        let range = DateRange::new(day(2), day(4));
        assert!(!range.contains(day(1)));
        assert!(range.contains(day(2)));
        assert!(range.contains(day(4)));
        assert!(!range.contains(day(5)));
    }

    #[test]
    fn single_day_contains_only_that_day() {
        let range = DateRange::single_day(day(3));
        assert!(range.contains(day(3)));
        assert!(!range.contains(day(2)));
        assert!(!range.contains(day(4)));
    }
}
