//! Domain model for forward-looking planned expenses.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A planned future expense not yet realized as an expense entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Commitment {
    pub id: Uuid,
    #[serde(rename = "concepto")]
    pub concept: String,
    #[serde(rename = "categoria", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "importePrevisto")]
    pub forecast_amount: f64,
    #[serde(rename = "estado", default)]
    pub status: CommitmentStatus,
    /// Back-reference to the expense entry that fulfilled this commitment.
    /// Set only when the status is [`CommitmentStatus::Fulfilled`].
    #[serde(rename = "gastoId", default, skip_serializing_if = "Option::is_none")]
    pub expense_id: Option<Uuid>,
}

impl Commitment {
    pub fn new(concept: impl Into<String>, forecast_amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            concept: concept.into(),
            category: None,
            forecast_amount,
            status: CommitmentStatus::Planned,
            expense_id: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
/// Lifecycle of a commitment. Transitions run strictly forward, one step at
/// a time.
pub enum CommitmentStatus {
    #[default]
    #[serde(rename = "PREVISTO")]
    Planned,
    #[serde(rename = "CONTRATADO")]
    Contracted,
    #[serde(rename = "CUMPLIDO")]
    Fulfilled,
}

impl CommitmentStatus {
    /// Whether `next` is the single allowed forward step from this state.
    pub fn can_advance_to(self, next: CommitmentStatus) -> bool {
        matches!(
            (self, next),
            (CommitmentStatus::Planned, CommitmentStatus::Contracted)
                | (CommitmentStatus::Contracted, CommitmentStatus::Fulfilled)
        )
    }
}

impl fmt::Display for CommitmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CommitmentStatus::Planned => "Planned",
            CommitmentStatus::Contracted => "Contracted",
            CommitmentStatus::Fulfilled => "Fulfilled",
        };
        f.write_str(label)
    }
}
