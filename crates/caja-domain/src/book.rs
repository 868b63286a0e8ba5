//! The ledger snapshot: the three ordered collections persisted as one
//! document.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{commitment::Commitment, expense::ExpenseEntry, income::IncomeEntry};

/// The triple of income entries, expense entries, and commitments at a point
/// in time. Insertion order is preserved and serves as the display tie-break
/// for equal dates.
///
/// Wire collection names match the persisted document format.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct LedgerBook {
    #[serde(rename = "ingresos", default)]
    pub incomes: Vec<IncomeEntry>,
    #[serde(rename = "gastos", default)]
    pub expenses: Vec<ExpenseEntry>,
    #[serde(rename = "compromisos", default)]
    pub commitments: Vec<Commitment>,
}

impl LedgerBook {
    pub fn is_empty(&self) -> bool {
        self.incomes.is_empty() && self.expenses.is_empty() && self.commitments.is_empty()
    }

    pub fn add_income(&mut self, entry: IncomeEntry) -> Uuid {
        let id = entry.id;
        self.incomes.push(entry);
        id
    }

    pub fn add_expense(&mut self, entry: ExpenseEntry) -> Uuid {
        let id = entry.id;
        self.expenses.push(entry);
        id
    }

    pub fn add_commitment(&mut self, commitment: Commitment) -> Uuid {
        let id = commitment.id;
        self.commitments.push(commitment);
        id
    }

    pub fn expense(&self, id: Uuid) -> Option<&ExpenseEntry> {
        self.expenses.iter().find(|entry| entry.id == id)
    }

    pub fn expense_mut(&mut self, id: Uuid) -> Option<&mut ExpenseEntry> {
        self.expenses.iter_mut().find(|entry| entry.id == id)
    }

    pub fn commitment_mut(&mut self, id: Uuid) -> Option<&mut Commitment> {
        self.commitments.iter_mut().find(|entry| entry.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn missing_collections_read_as_empty() {
        let book: LedgerBook = serde_json::from_str(r#"{"ingresos":[]}"#).unwrap();
        assert!(book.is_empty());
    }

    #[test]
    fn add_preserves_insertion_order() {
        let day = NaiveDate::from_ymd_opt(2025, 10, 4).unwrap();
        let mut book = LedgerBook::default();
        let first = book.add_expense(ExpenseEntry::new(day, "Hielo", "Hielos", 25.0, "Efectivo"));
        let second = book.add_expense(ExpenseEntry::new(day, "Limpieza", "Gastos", 8.92, "Efectivo"));
        assert_eq!(book.expenses[0].id, first);
        assert_eq!(book.expenses[1].id, second);
        assert!(book.expense(second).is_some());
        assert!(book.expense(Uuid::new_v4()).is_none());
    }
}
