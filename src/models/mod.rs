//! Core data models for tally
//!
//! The data structures that represent the ledger domain: monetary amounts,
//! calendar months, and transactions.

pub mod money;
pub mod month;
pub mod transaction;

pub use money::Money;
pub use month::Month;
pub use transaction::{Category, Transaction, TransactionKind};
