//! finviz-domain
//!
//! Pure data models for the finance dashboard (Transaction, SavingsPlan,
//! SpendingLimit, shared enums). No I/O, no HTTP, no storage. Only data
//! types and the wire-format contracts they serialize to.

pub mod common;
pub mod limit;
pub mod savings;
pub mod transaction;

pub use common::*;
pub use limit::*;
pub use savings::*;
pub use transaction::*;
