//! caja-domain
//!
//! Pure domain models for the till ledger (income, expenses, commitments)
//! plus the aggregate row types consumed by reporting views.
//! No I/O, no storage. Only data types and core enums.

pub mod book;
pub mod commitment;
pub mod common;
pub mod expense;
pub mod income;
pub mod summary;

pub use book::*;
pub use commitment::*;
pub use common::*;
pub use expense::*;
pub use income::*;
pub use summary::*;
