//! Domain model for recorded expense entries.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{Dated, REIMBURSEMENT_CATEGORY};

/// A recorded outflow, pending or settled.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExpenseEntry {
    pub id: Uuid,
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    #[serde(rename = "importe")]
    pub amount: f64,
    #[serde(rename = "metodoPago", default)]
    pub payment_method: String,
    #[serde(rename = "nombrePersona", default, skip_serializing_if = "Option::is_none")]
    pub person: Option<String>,
    #[serde(rename = "estado", default)]
    pub status: ExpenseStatus,
}

impl ExpenseEntry {
    pub fn new(
        date: NaiveDate,
        category: impl Into<String>,
        description: impl Into<String>,
        amount: f64,
        payment_method: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            category: category.into(),
            description: description.into(),
            amount,
            payment_method: payment_method.into(),
            person: None,
            status: ExpenseStatus::Pending,
        }
    }

    /// Attaches the member who advanced the money. Only meaningful for the
    /// reimbursement category; harmless elsewhere.
    pub fn paid_by(mut self, person: impl Into<String>) -> Self {
        self.person = Some(person.into());
        self
    }

    pub fn settled(mut self) -> Self {
        self.status = ExpenseStatus::Settled;
        self
    }

    /// An expense advanced personally by a member, repayable by the group.
    pub fn is_reimbursement(&self) -> bool {
        self.category == REIMBURSEMENT_CATEGORY
    }

    pub fn is_pending(&self) -> bool {
        self.status == ExpenseStatus::Pending
    }
}

impl Dated for ExpenseEntry {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
/// Settlement state of an expense. Wire literals match the persisted
/// document.
pub enum ExpenseStatus {
    #[default]
    #[serde(rename = "PENDIENTE")]
    Pending,
    #[serde(rename = "PAGADO")]
    Settled,
}

impl fmt::Display for ExpenseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExpenseStatus::Pending => "Pending",
            ExpenseStatus::Settled => "Settled",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_uses_spanish_wire_literals() {
        let day = NaiveDate::from_ymd_opt(2025, 10, 4).unwrap();
        let expense = ExpenseEntry::new(day, "Uno de nosotros", "Chuches", 41.84, "Pendiente")
            .paid_by("Jesús");
        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(json["estado"], "PENDIENTE");
        assert_eq!(json["nombrePersona"], "Jesús");

        let settled = expense.clone().settled();
        let json = serde_json::to_value(&settled).unwrap();
        assert_eq!(json["estado"], "PAGADO");
    }

    #[test]
    fn reimbursement_detection_matches_the_category_label() {
        let day = NaiveDate::from_ymd_opt(2025, 10, 4).unwrap();
        assert!(ExpenseEntry::new(day, "Uno de nosotros", "Luces", 100.0, "Pendiente")
            .is_reimbursement());
        assert!(!ExpenseEntry::new(day, "Proveedores", "Pedido", 1120.0, "Pendiente")
            .is_reimbursement());
    }
}
