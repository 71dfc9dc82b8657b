//! Summary and breakdown formatting

use super::truncate;
use crate::models::Month;
use crate::reports::{ExpenseBreakdown, Summary};

/// Format the three summary metrics
pub fn format_summary(summary: &Summary, currency_symbol: &str) -> String {
    let mut output = String::new();
    output.push_str("Summary\n");
    output.push_str(&"-".repeat(30));
    output.push('\n');
    output.push_str(&format!(
        "Total Income:  {:>12}\n",
        summary.income.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "Total Expense: {:>12}\n",
        summary.expense.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "Balance:       {:>12}\n",
        summary.balance.format_with_symbol(currency_symbol)
    ));
    output
}

/// Format the expense breakdown with per-category percentages
pub fn format_breakdown(breakdown: &ExpenseBreakdown, currency_symbol: &str) -> String {
    if breakdown.is_empty() {
        return "No expenses recorded yet.\n".to_string();
    }

    let mut output = String::new();
    output.push_str("Expense Breakdown\n");
    output.push_str(&"-".repeat(38));
    output.push('\n');

    for entry in &breakdown.entries {
        output.push_str(&format!(
            "{} {:>12} {:>6.1}%\n",
            truncate(entry.category.name(), 15),
            entry.total.format_with_symbol(currency_symbol),
            entry.percentage
        ));
    }

    output.push_str(&"-".repeat(38));
    output.push('\n');
    output.push_str(&format!(
        "{} {:>12}\n",
        truncate("Total", 15),
        breakdown.total.format_with_symbol(currency_symbol)
    ));
    output
}

/// Format the list of months available for filtering
pub fn format_months(months: &[Month]) -> String {
    if months.is_empty() {
        return "No months recorded yet.\n".to_string();
    }

    let mut output = String::from("Available months:\n");
    for month in months {
        output.push_str(&format!("  {}\n", month));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, Transaction, TransactionKind};
    use chrono::NaiveDate;

    fn sample_transactions() -> Vec<Transaction> {
        vec![
            Transaction::new(
                NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
                TransactionKind::Expense,
                Category::Food,
                Money::from_cents(2500),
            ),
            Transaction::new(
                NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
                TransactionKind::Expense,
                Category::Rent,
                Money::from_cents(7500),
            ),
        ]
    }

    #[test]
    fn test_format_summary() {
        let summary = Summary::generate(&sample_transactions());
        let text = format_summary(&summary, "$");

        assert!(text.contains("Total Income:"));
        assert!(text.contains("$0.00"));
        assert!(text.contains("Total Expense:"));
        assert!(text.contains("$100.00"));
        assert!(text.contains("-$100.00"));
    }

    #[test]
    fn test_format_breakdown() {
        let breakdown = ExpenseBreakdown::generate(&sample_transactions());
        let text = format_breakdown(&breakdown, "$");

        assert!(text.contains("Food"));
        assert!(text.contains("$25.00"));
        assert!(text.contains("25.0%"));
        assert!(text.contains("Rent"));
        assert!(text.contains("75.0%"));
        assert!(text.contains("Total"));
    }

    #[test]
    fn test_format_breakdown_empty_state() {
        let breakdown = ExpenseBreakdown::generate(&[]);
        assert_eq!(format_breakdown(&breakdown, "$"), "No expenses recorded yet.\n");
    }

    #[test]
    fn test_format_months() {
        let months = vec![Month::new(2024, 1), Month::new(2024, 2)];
        let text = format_months(&months);
        assert!(text.contains("2024-01"));
        assert!(text.contains("2024-02"));
    }

    #[test]
    fn test_format_months_empty_state() {
        assert_eq!(format_months(&[]), "No months recorded yet.\n");
    }
}
