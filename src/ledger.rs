//! The session ledger
//!
//! An append-only, ordered store of transactions. One ledger exists per user
//! session, owned by the session that created it and discarded with it; no
//! component other than [`Ledger::append`] ever mutates it.

use tracing::debug;

use crate::error::TallyResult;
use crate::models::Transaction;

/// Ordered, append-only collection of all transactions in a session
#[derive(Debug, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
        }
    }

    /// Append a transaction to the end of the ledger
    ///
    /// Rejects transactions whose amount is not strictly positive. On
    /// rejection the ledger is left untouched.
    pub fn append(&mut self, transaction: Transaction) -> TallyResult<()> {
        transaction.validate()?;

        debug!(
            date = %transaction.date,
            kind = %transaction.kind,
            category = %transaction.category,
            amount = %transaction.amount,
            "transaction appended"
        );
        self.transactions.push(transaction);
        Ok(())
    }

    /// Read-only view of the current contents, in insertion order
    ///
    /// Reflects every prior successful append and nothing else; all derived
    /// views (summary, breakdown, month filter, exports) consume this.
    pub fn snapshot(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Number of recorded transactions
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Check whether the ledger has no transactions
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
