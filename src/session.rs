//! One user session
//!
//! A [`Session`] owns exactly one [`Ledger`] together with the user's
//! settings, and exposes the operations the presentation shell calls. The
//! hosting shell creates one instance per session and drops it at session
//! end; dropping the session discards the ledger.

use chrono::NaiveDate;
use tracing::info;

use crate::config::Settings;
use crate::error::TallyResult;
use crate::export;
use crate::filter;
use crate::ledger::Ledger;
use crate::models::{Category, Money, Month, Transaction, TransactionKind};
use crate::reports::{ExpenseBreakdown, Summary};

/// An owned ledger plus settings: the surface the shell drives
#[derive(Debug, Default)]
pub struct Session {
    ledger: Ledger,
    settings: Settings,
}

impl Session {
    /// Start a session with an empty ledger
    pub fn new(settings: Settings) -> Self {
        Self {
            ledger: Ledger::new(),
            settings,
        }
    }

    /// The session's settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Record a transaction; rejects non-positive amounts
    pub fn add_transaction(
        &mut self,
        date: NaiveDate,
        kind: TransactionKind,
        category: Category,
        amount: Money,
    ) -> TallyResult<()> {
        self.ledger
            .append(Transaction::new(date, kind, category, amount))
    }

    /// All transactions in entry order, for table rendering
    pub fn transactions(&self) -> &[Transaction] {
        self.ledger.snapshot()
    }

    /// Income, expense, and balance totals
    pub fn summary(&self) -> Summary {
        Summary::generate(self.ledger.snapshot())
    }

    /// Expense totals grouped by category, for the breakdown chart
    pub fn category_breakdown(&self) -> ExpenseBreakdown {
        ExpenseBreakdown::generate(self.ledger.snapshot())
    }

    /// Distinct months with transactions, in first-encounter order
    pub fn available_months(&self) -> Vec<Month> {
        filter::available_months(self.ledger.snapshot())
    }

    /// Transactions falling in the given month, in entry order
    pub fn transactions_for_month(&self, month: Month) -> Vec<Transaction> {
        filter::transactions_for_month(self.ledger.snapshot(), month)
    }

    /// The full ledger as CSV bytes, offered as `transactions.csv`
    pub fn export_csv(&self) -> TallyResult<Vec<u8>> {
        info!(transactions = self.ledger.len(), "exporting ledger as CSV");
        export::csv::to_bytes(self.ledger.snapshot())
    }

    /// The full ledger as PDF bytes, offered as `transactions.pdf`
    pub fn export_pdf(&self) -> TallyResult<Vec<u8>> {
        info!(transactions = self.ledger.len(), "exporting ledger as PDF");
        export::pdf::to_bytes(self.ledger.snapshot())
    }
}
