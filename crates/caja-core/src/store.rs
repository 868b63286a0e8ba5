//! The authoritative in-memory ledger plus its durable-persistence contract.

use caja_domain::{Commitment, CommitmentStatus, ExpenseEntry, ExpenseStatus, IncomeEntry, LedgerBook};
use uuid::Uuid;

use crate::{
    error::{CoreError, CoreResult},
    seed,
    storage::SlotStorage,
};

/// Owns the three ledger collections and writes the full snapshot to the
/// durable slot after every successful mutation.
///
/// Single logical writer, synchronous persistence; see [`SlotStorage`] for
/// the slot contract. A failed write surfaces as
/// [`CoreError::Persistence`] while the in-memory mutation stands, so an
/// unflushed store is at risk of loss on restart.
pub struct LedgerStore {
    book: LedgerBook,
    storage: Box<dyn SlotStorage>,
}

impl LedgerStore {
    /// Hydrates from the durable slot when present, otherwise starts empty,
    /// then runs the seeding guard exactly once.
    pub fn open(storage: Box<dyn SlotStorage>) -> CoreResult<Self> {
        let slot_present = storage.exists()?;
        let book = match storage.read()? {
            Some(book) => {
                tracing::info!(
                    incomes = book.incomes.len(),
                    expenses = book.expenses.len(),
                    commitments = book.commitments.len(),
                    "hydrated ledger from durable slot"
                );
                book
            }
            None => LedgerBook::default(),
        };
        let mut store = Self { book, storage };
        // Slot presence, even with empty collections, means persistence has
        // run before: a user who emptied their ledger stays empty.
        if !slot_present && store.book.is_empty() {
            store.seed_demo()?;
        }
        Ok(store)
    }

    /// Returns an owned copy of the three collections.
    pub fn snapshot(&self) -> LedgerBook {
        self.book.clone()
    }

    pub fn append_income(&mut self, entry: IncomeEntry) -> CoreResult<Uuid> {
        validate_income(&entry)?;
        let id = self.book.add_income(entry);
        self.persist()?;
        tracing::debug!(%id, "appended income entry");
        Ok(id)
    }

    pub fn append_expense(&mut self, entry: ExpenseEntry) -> CoreResult<Uuid> {
        validate_expense(&entry)?;
        let id = self.book.add_expense(entry);
        self.persist()?;
        tracing::debug!(%id, "appended expense entry");
        Ok(id)
    }

    pub fn append_commitment(&mut self, commitment: Commitment) -> CoreResult<Uuid> {
        validate_commitment(&commitment)?;
        let id = self.book.add_commitment(commitment);
        self.persist()?;
        tracing::debug!(%id, "appended commitment");
        Ok(id)
    }

    /// Marks a pending expense as settled.
    pub fn settle_expense(&mut self, id: Uuid) -> CoreResult<()> {
        let entry = self.book.expense_mut(id).ok_or(CoreError::NotFound(id))?;
        if entry.status != ExpenseStatus::Pending {
            return Err(CoreError::InvalidTransition(format!(
                "expense {id} is already settled"
            )));
        }
        entry.status = ExpenseStatus::Settled;
        self.persist()?;
        tracing::debug!(%id, "settled expense");
        Ok(())
    }

    /// Corrective action: returns a settled expense to pending. Never applied
    /// implicitly.
    pub fn reopen_expense(&mut self, id: Uuid) -> CoreResult<()> {
        let entry = self.book.expense_mut(id).ok_or(CoreError::NotFound(id))?;
        if entry.status != ExpenseStatus::Settled {
            return Err(CoreError::InvalidTransition(format!(
                "expense {id} is not settled"
            )));
        }
        entry.status = ExpenseStatus::Pending;
        self.persist()?;
        tracing::debug!(%id, "reopened expense");
        Ok(())
    }

    /// Advances a commitment one step along Planned -> Contracted ->
    /// Fulfilled. Fulfilling requires the expense entry that realized it.
    pub fn transition_commitment(
        &mut self,
        id: Uuid,
        new_status: CommitmentStatus,
        expense_id: Option<Uuid>,
    ) -> CoreResult<()> {
        let current = self
            .book
            .commitments
            .iter()
            .find(|c| c.id == id)
            .ok_or(CoreError::NotFound(id))?
            .status;
        if !current.can_advance_to(new_status) {
            return Err(CoreError::InvalidTransition(format!(
                "commitment {id} cannot move {current} -> {new_status}"
            )));
        }
        let resolved_expense = match (new_status, expense_id) {
            (CommitmentStatus::Fulfilled, Some(expense_id)) => {
                if self.book.expense(expense_id).is_none() {
                    return Err(CoreError::InvalidTransition(format!(
                        "commitment {id} fulfilled by unknown expense {expense_id}"
                    )));
                }
                Some(expense_id)
            }
            (CommitmentStatus::Fulfilled, None) => {
                return Err(CoreError::InvalidTransition(format!(
                    "commitment {id} cannot be fulfilled without its expense entry"
                )));
            }
            (_, Some(_)) => {
                return Err(CoreError::InvalidTransition(format!(
                    "commitment {id} only accepts an expense reference when fulfilling"
                )));
            }
            (_, None) => None,
        };
        let commitment = self
            .book
            .commitment_mut(id)
            .ok_or(CoreError::NotFound(id))?;
        commitment.status = new_status;
        commitment.expense_id = resolved_expense;
        self.persist()?;
        tracing::debug!(%id, status = %new_status, "advanced commitment");
        Ok(())
    }

    fn seed_demo(&mut self) -> CoreResult<()> {
        for entry in seed::demo_incomes() {
            self.book.add_income(entry);
        }
        for entry in seed::demo_expenses() {
            self.book.add_expense(entry);
        }
        self.persist()?;
        tracing::info!("seeded demonstration ledger into fresh slot");
        Ok(())
    }

    fn persist(&self) -> CoreResult<()> {
        self.storage.write(&self.book)
    }
}

fn validate_amount(amount: f64, field: &str) -> CoreResult<()> {
    if !amount.is_finite() {
        return Err(CoreError::Validation(format!("{field} must be a finite amount")));
    }
    Ok(())
}

fn validate_income(entry: &IncomeEntry) -> CoreResult<()> {
    if entry.category.trim().is_empty() {
        return Err(CoreError::Validation("income category is required".into()));
    }
    validate_amount(entry.amount, "income amount")?;
    validate_amount(entry.initial_float, "initial float")
}

fn validate_expense(entry: &ExpenseEntry) -> CoreResult<()> {
    if entry.category.trim().is_empty() {
        return Err(CoreError::Validation("expense category is required".into()));
    }
    validate_amount(entry.amount, "expense amount")?;
    if entry.amount < 0.0 {
        return Err(CoreError::Validation(
            "expense amount must not be negative".into(),
        ));
    }
    Ok(())
}

fn validate_commitment(commitment: &Commitment) -> CoreResult<()> {
    if commitment.concept.trim().is_empty() {
        return Err(CoreError::Validation("commitment concept is required".into()));
    }
    validate_amount(commitment.forecast_amount, "forecast amount")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::sync::{Arc, Mutex};

    /// In-memory slot double; shared so a store can be reopened against the
    /// same slot to simulate a restart.
    #[derive(Clone, Default)]
    struct MemorySlot {
        value: Arc<Mutex<Option<LedgerBook>>>,
    }

    impl MemorySlot {
        fn boxed(&self) -> Box<dyn SlotStorage> {
            Box::new(self.clone())
        }
    }

    impl SlotStorage for MemorySlot {
        fn read(&self) -> CoreResult<Option<LedgerBook>> {
            Ok(self.value.lock().unwrap().clone())
        }

        fn write(&self, book: &LedgerBook) -> CoreResult<()> {
            *self.value.lock().unwrap() = Some(book.clone());
            Ok(())
        }

        fn exists(&self) -> CoreResult<bool> {
            Ok(self.value.lock().unwrap().is_some())
        }
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 4).unwrap()
    }

    fn empty_store(slot: &MemorySlot) -> LedgerStore {
        // Pre-write an empty slot so the demo data stays out of the way.
        slot.write(&LedgerBook::default()).unwrap();
        LedgerStore::open(slot.boxed()).unwrap()
    }

    #[test]
    fn fresh_slot_is_seeded_exactly_once() {
        let slot = MemorySlot::default();
        let store = LedgerStore::open(slot.boxed()).unwrap();
        let seeded = store.snapshot();
        assert_eq!(seeded.incomes.len(), 4);
        assert_eq!(seeded.expenses.len(), 10);

        // Reopening against the now-written slot must not reseed.
        let reopened = LedgerStore::open(slot.boxed()).unwrap();
        assert_eq!(reopened.snapshot(), seeded);
    }

    #[test]
    fn empty_slot_presence_suppresses_seeding() {
        let slot = MemorySlot::default();
        slot.write(&LedgerBook::default()).unwrap();
        let store = LedgerStore::open(slot.boxed()).unwrap();
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn snapshot_survives_a_simulated_restart() {
        let slot = MemorySlot::default();
        let mut store = empty_store(&slot);
        store
            .append_income(IncomeEntry::new(
                day(),
                1985.0,
                "Facturación",
                "Facturación",
                "Efectivo",
                true,
            ))
            .unwrap();
        store
            .append_expense(ExpenseEntry::new(day(), "Hielo", "Hielos", 25.0, "Efectivo"))
            .unwrap();
        store.append_commitment(Commitment::new("Orquesta", 600.0)).unwrap();
        let before = store.snapshot();
        drop(store);

        let reopened = LedgerStore::open(slot.boxed()).unwrap();
        assert_eq!(reopened.snapshot(), before);
    }

    #[test]
    fn invalid_append_leaves_the_store_unchanged() {
        let slot = MemorySlot::default();
        let mut store = empty_store(&slot);
        let err = store
            .append_expense(ExpenseEntry::new(day(), "  ", "Sin categoría", 5.0, "Efectivo"))
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        let err = store
            .append_expense(ExpenseEntry::new(day(), "Hielo", "Negativo", -5.0, "Efectivo"))
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn expense_settlement_is_explicit_in_both_directions() {
        let slot = MemorySlot::default();
        let mut store = empty_store(&slot);
        let id = store
            .append_expense(ExpenseEntry::new(day(), "Proveedores", "Pedido", 1120.0, "Pendiente"))
            .unwrap();

        store.settle_expense(id).unwrap();
        assert!(matches!(
            store.settle_expense(id),
            Err(CoreError::InvalidTransition(_))
        ));

        store.reopen_expense(id).unwrap();
        assert!(store.snapshot().expense(id).unwrap().is_pending());
        assert!(matches!(
            store.settle_expense(Uuid::new_v4()),
            Err(CoreError::NotFound(_))
        ));
    }

    #[test]
    fn commitment_state_machine_enforces_order() {
        let slot = MemorySlot::default();
        let mut store = empty_store(&slot);
        let commitment = store.append_commitment(Commitment::new("Orquesta", 600.0)).unwrap();

        // Skipping straight to fulfilled is rejected.
        assert!(matches!(
            store.transition_commitment(commitment, CommitmentStatus::Fulfilled, None),
            Err(CoreError::InvalidTransition(_))
        ));

        store
            .transition_commitment(commitment, CommitmentStatus::Contracted, None)
            .unwrap();

        // Fulfilling without the realizing expense is rejected.
        assert!(matches!(
            store.transition_commitment(commitment, CommitmentStatus::Fulfilled, None),
            Err(CoreError::InvalidTransition(_))
        ));
        // As is fulfilling with an unknown expense.
        assert!(matches!(
            store.transition_commitment(commitment, CommitmentStatus::Fulfilled, Some(Uuid::new_v4())),
            Err(CoreError::InvalidTransition(_))
        ));

        let expense = store
            .append_expense(ExpenseEntry::new(day(), "Fiestas", "Orquesta", 600.0, "Efectivo"))
            .unwrap();
        store
            .transition_commitment(commitment, CommitmentStatus::Fulfilled, Some(expense))
            .unwrap();

        let snapshot = store.snapshot();
        let fulfilled = snapshot.commitments.iter().find(|c| c.id == commitment).unwrap();
        assert_eq!(fulfilled.status, CommitmentStatus::Fulfilled);
        assert_eq!(fulfilled.expense_id, Some(expense));

        // No backward moves once fulfilled.
        assert!(matches!(
            store.transition_commitment(commitment, CommitmentStatus::Contracted, None),
            Err(CoreError::InvalidTransition(_))
        ));
    }

    #[test]
    fn expense_reference_is_rejected_outside_fulfillment() {
        let slot = MemorySlot::default();
        let mut store = empty_store(&slot);
        let commitment = store.append_commitment(Commitment::new("Luces", 200.0)).unwrap();
        let expense = store
            .append_expense(ExpenseEntry::new(day(), "Fiestas", "Luces", 200.0, "Efectivo"))
            .unwrap();
        assert!(matches!(
            store.transition_commitment(commitment, CommitmentStatus::Contracted, Some(expense)),
            Err(CoreError::InvalidTransition(_))
        ));
    }
}
