//! Month filtering over a ledger snapshot

use crate::models::{Month, Transaction};

/// Distinct months present in the snapshot, in first-encounter order
///
/// Scanning order matches the ledger, so the first month listed is the month
/// of the earliest-entered transaction, not necessarily the earliest month.
/// An empty snapshot yields an empty list and no month can be selected.
pub fn available_months(transactions: &[Transaction]) -> Vec<Month> {
    let mut months = Vec::new();
    for transaction in transactions {
        let month = transaction.month();
        if !months.contains(&month) {
            months.push(month);
        }
    }
    months
}

/// Transactions whose date falls in the given month, preserving ledger order
pub fn transactions_for_month(transactions: &[Transaction], month: Month) -> Vec<Transaction> {
    transactions
        .iter()
        .filter(|transaction| month.contains(transaction.date))
        .cloned()
        .collect()
}
