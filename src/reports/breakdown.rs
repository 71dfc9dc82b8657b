//! Expense breakdown by category
//!
//! Groups expense transactions by category and sums their amounts, the data
//! behind the category chart. Income transactions are never included.

use crate::models::{Category, Money, Transaction};

/// Total expense for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Money,
    /// Share of all expenses, 0–100
    pub percentage: f64,
}

/// Expense totals per category over a ledger snapshot
///
/// Entries appear in the order their category is first encountered in the
/// ledger; each category appears exactly once. With no expense transactions
/// the breakdown is empty and the caller renders a "no data" state instead
/// of a chart.
#[derive(Debug, Clone, Default)]
pub struct ExpenseBreakdown {
    pub entries: Vec<CategoryTotal>,
    /// Sum of all entry totals; equals the summary's expense total
    pub total: Money,
}

impl ExpenseBreakdown {
    /// Compute the breakdown over a snapshot. Pure.
    pub fn generate(transactions: &[Transaction]) -> Self {
        let mut totals: Vec<(Category, Money)> = Vec::new();

        for transaction in transactions.iter().filter(|t| t.kind.is_expense()) {
            match totals.iter_mut().find(|(c, _)| *c == transaction.category) {
                Some((_, total)) => *total += transaction.amount,
                None => totals.push((transaction.category.clone(), transaction.amount)),
            }
        }

        let total: Money = totals.iter().map(|(_, amount)| *amount).sum();
        let entries = totals
            .into_iter()
            .map(|(category, category_total)| CategoryTotal {
                percentage: if total.is_zero() {
                    0.0
                } else {
                    category_total.cents() as f64 / total.cents() as f64 * 100.0
                },
                category,
                total: category_total,
            })
            .collect();

        Self { entries, total }
    }

    /// Check whether any expense was recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the total for one category
    pub fn total_for(&self, category: &Category) -> Option<Money> {
        self.entries
            .iter()
            .find(|entry| entry.category == *category)
            .map(|entry| entry.total)
    }
}
