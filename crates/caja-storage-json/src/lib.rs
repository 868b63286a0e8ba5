//! caja-storage-json
//!
//! Filesystem-backed durable slot for the ledger snapshot: one fixed JSON
//! file, written atomically by staging to a temporary file.

use std::{
    fs,
    path::{Path, PathBuf},
};

use caja_core::{error::CoreResult, CoreError, SlotStorage};
use caja_domain::LedgerBook;

/// File name of the durable slot.
pub const SLOT_FILE_NAME: &str = "caja-storage.json";

const TMP_EXTENSION: &str = "tmp";

/// JSON persistence for the ledger snapshot at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonSlotStorage {
    path: PathBuf,
}

impl JsonSlotStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Slot under the user's documents directory, falling back to the home
    /// directory and finally the working directory.
    pub fn at_default_location() -> Self {
        let base = dirs::document_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(base.join("Caja").join(SLOT_FILE_NAME))
    }

    pub fn slot_path(&self) -> &Path {
        &self.path
    }
}

impl SlotStorage for JsonSlotStorage {
    fn read(&self) -> CoreResult<Option<LedgerBook>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&self.path)?;
        let book = serde_json::from_str(&data)
            .map_err(|err| CoreError::Persistence(err.to_string()))?;
        Ok(Some(book))
    }

    fn write(&self, book: &LedgerBook) -> CoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(book)
            .map_err(|err| CoreError::Persistence(err.to_string()))?;
        let tmp = self.path.with_extension(TMP_EXTENSION);
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn exists(&self) -> CoreResult<bool> {
        Ok(self.path.exists())
    }
}
