//! Aggregate row types produced by the reporting functions.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// Total spend for one expense category, with its share of the grand total.
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
    /// Fraction of the grand total in `[0, 1]`. Zero when nothing was spent.
    pub share: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// Outstanding pending reimbursements owed to one member.
pub struct PersonDebt {
    pub person: String,
    pub total: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
/// Pending reimbursement totals per member plus the grand total shown on the
/// debt badge.
pub struct DebtSummary {
    pub per_person: Vec<PersonDebt>,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// One day of the income-versus-exposure series.
pub struct DailyPoint {
    pub date: NaiveDate,
    /// Realized income for the day (confirmed entries, float-adjusted).
    pub income: f64,
    /// Unsettled exposure: pending expenses only, not total spend.
    pub expenses: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Kind tag for rows in the chronological movement feed.
pub enum MovementKind {
    #[serde(rename = "ingreso")]
    Income,
    #[serde(rename = "gasto")]
    Expense,
}

impl fmt::Display for MovementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MovementKind::Income => "Income",
            MovementKind::Expense => "Expense",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// One row of the movement feed: an income or expense tagged by kind.
pub struct Movement {
    pub id: Uuid,
    pub date: NaiveDate,
    pub amount: f64,
    pub kind: MovementKind,
    pub description: String,
}
