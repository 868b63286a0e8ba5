//! caja-core
//!
//! Ledger store, seeding guard, and the pure aggregation functions behind
//! every reporting view. Depends on caja-domain. No CLI, no terminal I/O;
//! durable persistence goes through the [`storage::SlotStorage`] trait.

pub mod error;
pub mod seed;
pub mod storage;
pub mod store;
pub mod summary;

pub use error::CoreError;
pub use storage::SlotStorage;
pub use store::LedgerStore;
pub use summary::SummaryService;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("caja_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}
