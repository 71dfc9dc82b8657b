//! CSV export
//!
//! Writes the ledger as UTF-8 CSV: a `Date,Type,Category,Amount` header row
//! followed by one row per transaction in ledger order. Amounts are written
//! as plain decimals at the ledger's stored two-decimal precision.

use std::io::Write;

use crate::error::{TallyError, TallyResult};
use crate::models::Transaction;

/// Write the ledger as CSV to the given writer
pub fn write_transactions<W: Write>(transactions: &[Transaction], writer: W) -> TallyResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(["Date", "Type", "Category", "Amount"])?;

    for transaction in transactions {
        csv_writer.write_record([
            transaction.date.format("%Y-%m-%d").to_string(),
            transaction.kind.to_string(),
            transaction.category.name().to_string(),
            transaction.amount.format_plain(),
        ])?;
    }

    csv_writer
        .flush()
        .map_err(|e| TallyError::Export(e.to_string()))?;
    Ok(())
}

/// Render the ledger as CSV bytes
pub fn to_bytes(transactions: &[Transaction]) -> TallyResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_transactions(transactions, &mut buffer)?;
    Ok(buffer)
}
