//! Summary totals
//!
//! Computes the three headline metrics over a ledger snapshot: total income,
//! total expense, and their difference.

use crate::models::{Money, Transaction, TransactionKind};

/// Aggregate totals for a ledger snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Sum of all income amounts
    pub income: Money,
    /// Sum of all expense amounts
    pub expense: Money,
    /// income − expense; negative when spending exceeds income
    pub balance: Money,
}

impl Summary {
    /// Compute totals over a snapshot. Pure; an empty snapshot yields zeroes.
    pub fn generate(transactions: &[Transaction]) -> Self {
        let mut income = Money::zero();
        let mut expense = Money::zero();

        for transaction in transactions {
            match transaction.kind {
                TransactionKind::Income => income += transaction.amount,
                TransactionKind::Expense => expense += transaction.amount,
            }
        }

        Self {
            income,
            expense,
            balance: income - expense,
        }
    }
}
