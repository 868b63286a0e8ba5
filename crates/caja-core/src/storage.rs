use caja_domain::LedgerBook;

use crate::error::CoreResult;

/// Abstraction over the durable slot holding the serialized ledger snapshot.
///
/// The slot is a single fixed location; its mere presence (even with empty
/// collections) records that persistence has run before, which the seeding
/// guard relies on.
pub trait SlotStorage: Send + Sync {
    /// Reads the slot. `Ok(None)` means the slot has never been written.
    fn read(&self) -> CoreResult<Option<LedgerBook>>;

    /// Overwrites the slot with the full snapshot.
    fn write(&self, book: &LedgerBook) -> CoreResult<()>;

    /// Whether the slot has ever been written, regardless of content.
    fn exists(&self) -> CoreResult<bool>;
}
