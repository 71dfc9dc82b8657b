//! Transaction model
//!
//! One income or expense entry: date, kind, category, amount. Entries are
//! immutable once recorded; the ledger only ever appends them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;
use super::month::Month;
use crate::error::TallyError;

/// Whether a transaction adds to or draws from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }

    pub fn is_expense(&self) -> bool {
        matches!(self, Self::Expense)
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            _ => Err(TallyError::validation(format!(
                "Invalid transaction type: '{}' (expected income or expense)",
                s
            ))),
        }
    }
}

/// A spending or income category
///
/// The built-in names match the entry form's selector. Anything else the
/// user types is carried through as a free-form name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    Food,
    Transport,
    Shopping,
    Rent,
    Salary,
    Entertainment,
    Healthcare,
    Bills,
    Other,
    Custom(String),
}

impl Category {
    /// The built-in categories, in selector order
    pub const BUILTIN: [Category; 9] = [
        Category::Food,
        Category::Transport,
        Category::Shopping,
        Category::Rent,
        Category::Salary,
        Category::Entertainment,
        Category::Healthcare,
        Category::Bills,
        Category::Other,
    ];

    /// The category's display name
    pub fn name(&self) -> &str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Shopping => "Shopping",
            Self::Rent => "Rent",
            Self::Salary => "Salary",
            Self::Entertainment => "Entertainment",
            Self::Healthcare => "Healthcare",
            Self::Bills => "Bills",
            Self::Other => "Other",
            Self::Custom(name) => name,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<String> for Category {
    fn from(name: String) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "food" => Self::Food,
            "transport" => Self::Transport,
            "shopping" => Self::Shopping,
            "rent" => Self::Rent,
            "salary" => Self::Salary,
            "entertainment" => Self::Entertainment,
            "healthcare" => Self::Healthcare,
            "bills" => Self::Bills,
            "other" => Self::Other,
            _ => Self::Custom(name),
        }
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.name().to_string()
    }
}

impl FromStr for Category {
    type Err = TallyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(TallyError::validation("Category cannot be empty"));
        }
        Ok(Self::from(trimmed.to_string()))
    }
}

/// A single ledger entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Calendar date, no time component
    pub date: NaiveDate,

    /// Income or expense
    pub kind: TransactionKind,

    /// Spending or income category
    pub category: Category,

    /// Amount in the session currency; always positive for recorded entries
    pub amount: Money,
}

impl Transaction {
    /// Create a new transaction
    pub fn new(date: NaiveDate, kind: TransactionKind, category: Category, amount: Money) -> Self {
        Self {
            date,
            kind,
            category,
            amount,
        }
    }

    /// Validate the transaction for recording
    pub fn validate(&self) -> Result<(), TallyError> {
        if !self.amount.is_positive() {
            return Err(TallyError::validation(
                "Transaction amount must be greater than zero",
            ));
        }
        Ok(())
    }

    /// The month this transaction falls in
    pub fn month(&self) -> Month {
        Month::from_date(self.date)
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.category,
            self.amount
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!(
            "income".parse::<TransactionKind>().unwrap(),
            TransactionKind::Income
        );
        assert_eq!(
            "Expense".parse::<TransactionKind>().unwrap(),
            TransactionKind::Expense
        );
        assert!("transfer".parse::<TransactionKind>().is_err());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(TransactionKind::Income.to_string(), "Income");
        assert_eq!(TransactionKind::Expense.to_string(), "Expense");
    }

    #[test]
    fn test_category_parse_builtin() {
        assert_eq!("Food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!("rent".parse::<Category>().unwrap(), Category::Rent);
        assert_eq!("HEALTHCARE".parse::<Category>().unwrap(), Category::Healthcare);
    }

    #[test]
    fn test_category_parse_custom() {
        let category = "Daycare".parse::<Category>().unwrap();
        assert_eq!(category, Category::Custom("Daycare".to_string()));
        assert_eq!(category.name(), "Daycare");
    }

    #[test]
    fn test_category_rejects_empty() {
        assert!("".parse::<Category>().is_err());
        assert!("   ".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_builtin_order() {
        assert_eq!(Category::BUILTIN[0], Category::Food);
        assert_eq!(Category::BUILTIN[8], Category::Other);
    }

    #[test]
    fn test_category_serde_round_trip() {
        let json = serde_json::to_string(&Category::Food).unwrap();
        assert_eq!(json, "\"Food\"");
        assert_eq!(serde_json::from_str::<Category>("\"Food\"").unwrap(), Category::Food);

        let custom: Category = serde_json::from_str("\"Daycare\"").unwrap();
        assert_eq!(custom, Category::Custom("Daycare".to_string()));
    }

    #[test]
    fn test_validate_positive_amount() {
        let txn = Transaction::new(
            sample_date(),
            TransactionKind::Expense,
            Category::Food,
            Money::from_cents(2000),
        );
        assert!(txn.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_non_positive() {
        for cents in [0, -500] {
            let txn = Transaction::new(
                sample_date(),
                TransactionKind::Expense,
                Category::Food,
                Money::from_cents(cents),
            );
            assert!(txn.validate().unwrap_err().is_validation());
        }
    }

    #[test]
    fn test_month() {
        let txn = Transaction::new(
            sample_date(),
            TransactionKind::Income,
            Category::Salary,
            Money::from_cents(100_000),
        );
        assert_eq!(txn.month(), Month::new(2024, 1));
    }

    #[test]
    fn test_display() {
        let txn = Transaction::new(
            sample_date(),
            TransactionKind::Expense,
            Category::Food,
            Money::from_cents(2000),
        );
        assert_eq!(format!("{}", txn), "2024-01-15 Expense Food $20.00");
    }
}
