//! Transaction table formatting

use super::truncate;
use crate::models::Transaction;

const CATEGORY_WIDTH: usize = 15;

/// Format a single transaction as a table row
pub fn format_transaction_row(
    transaction: &Transaction,
    currency_symbol: &str,
    date_format: &str,
) -> String {
    format!(
        "{:10} {:7} {} {:>12}",
        transaction.date.format(date_format).to_string(),
        transaction.kind.to_string(),
        truncate(transaction.category.name(), CATEGORY_WIDTH),
        transaction.amount.format_with_symbol(currency_symbol)
    )
}

/// Format a list of transactions as a table
pub fn format_register(
    transactions: &[Transaction],
    currency_symbol: &str,
    date_format: &str,
) -> String {
    if transactions.is_empty() {
        return "No transactions recorded yet.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {:7} {:CATEGORY_WIDTH$} {:>12}\n",
        "Date", "Type", "Category", "Amount"
    ));
    output.push_str(&"-".repeat(47));
    output.push('\n');

    for transaction in transactions {
        output.push_str(&format_transaction_row(
            transaction,
            currency_symbol,
            date_format,
        ));
        output.push('\n');
    }

    output
}
