//! Domain model for recorded income entries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{Dated, FLOAT_COMMENT_MARKER};

/// A recorded inflow of funds, confirmed or provisional.
///
/// Wire field names match the persisted JSON document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IncomeEntry {
    pub id: Uuid,
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
    #[serde(rename = "importe")]
    pub amount: f64,
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "comentario", default)]
    pub comment: String,
    #[serde(rename = "metodoPago", default)]
    pub payment_method: String,
    #[serde(rename = "habiaCambio", default)]
    pub had_float: bool,
    #[serde(rename = "cambioInicial", default)]
    pub initial_float: f64,
    #[serde(rename = "confirmado", default)]
    pub confirmed: bool,
}

impl IncomeEntry {
    pub fn new(
        date: NaiveDate,
        amount: f64,
        category: impl Into<String>,
        comment: impl Into<String>,
        payment_method: impl Into<String>,
        confirmed: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            amount,
            category: category.into(),
            comment: comment.into(),
            payment_method: payment_method.into(),
            had_float: false,
            initial_float: 0.0,
            confirmed,
        }
    }

    /// Marks the entry as carrying the initial till float.
    pub fn with_float(mut self, initial_float: f64) -> Self {
        self.had_float = true;
        self.initial_float = initial_float;
        self
    }

    /// A till-float booking: recorded as income for continuity but excluded
    /// from realized profit.
    pub fn is_float_entry(&self) -> bool {
        self.comment.to_lowercase().contains(FLOAT_COMMENT_MARKER)
    }

    /// Contribution of this entry to realized totals. Float bookings count
    /// negatively so the starting cash never inflates profit.
    pub fn realized_amount(&self) -> f64 {
        if self.is_float_entry() {
            -self.amount
        } else {
            self.amount
        }
    }
}

impl Dated for IncomeEntry {
    fn date(&self) -> NaiveDate {
        self.date
    }
}
