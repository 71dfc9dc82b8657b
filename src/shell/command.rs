//! Line command parsing for the interactive shell

use chrono::NaiveDate;
use std::path::PathBuf;

use crate::error::{TallyError, TallyResult};
use crate::models::{Category, Money, Month, TransactionKind};

/// One parsed input line
#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    /// Record a transaction; a missing date means "today"
    Add {
        kind: TransactionKind,
        category: Category,
        amount: Money,
        date: Option<NaiveDate>,
    },
    /// Show the full transaction table
    List,
    /// Show income/expense/balance totals
    Summary,
    /// Show expense totals per category
    Breakdown,
    /// Show the months available for filtering
    Months,
    /// Show transactions for one month
    Month(Month),
    /// Write the ledger as CSV, to the given path or the default
    ExportCsv(Option<PathBuf>),
    /// Write the ledger as PDF, to the given path or the default
    ExportPdf(Option<PathBuf>),
    Help,
    Quit,
}

impl ShellCommand {
    /// Parse one input line; blank lines parse to `None`
    pub fn parse(line: &str) -> TallyResult<Option<Self>> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&keyword, args)) = tokens.split_first() else {
            return Ok(None);
        };

        let command = match keyword.to_ascii_lowercase().as_str() {
            "add" => parse_add(args)?,
            "list" | "transactions" => Self::List,
            "summary" => Self::Summary,
            "breakdown" | "categories" => Self::Breakdown,
            "months" => Self::Months,
            "month" => match args {
                [month] => Self::Month(Month::parse(month)?),
                _ => return Err(TallyError::validation("Usage: month <YYYY-MM>")),
            },
            "export" => match args {
                ["csv"] => Self::ExportCsv(None),
                ["csv", path] => Self::ExportCsv(Some(PathBuf::from(path))),
                ["pdf"] => Self::ExportPdf(None),
                ["pdf", path] => Self::ExportPdf(Some(PathBuf::from(path))),
                _ => return Err(TallyError::validation("Usage: export <csv|pdf> [path]")),
            },
            "help" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => {
                return Err(TallyError::validation(format!(
                    "Unknown command: '{}'. Type 'help' for usage.",
                    other
                )))
            }
        };

        Ok(Some(command))
    }
}

fn parse_add(args: &[&str]) -> TallyResult<ShellCommand> {
    let (kind, category, amount, date) = match args {
        [kind, category, amount] => (kind, category, amount, None),
        [kind, category, amount, date] => (kind, category, amount, Some(*date)),
        _ => {
            return Err(TallyError::validation(
                "Usage: add <income|expense> <category> <amount> [YYYY-MM-DD]",
            ))
        }
    };

    let date = date
        .map(|d| {
            NaiveDate::parse_from_str(d, "%Y-%m-%d").map_err(|_| {
                TallyError::validation(format!("Invalid date: '{}' (expected YYYY-MM-DD)", d))
            })
        })
        .transpose()?;

    Ok(ShellCommand::Add {
        kind: kind.parse()?,
        category: category.parse()?,
        amount: Money::parse(amount)?,
        date,
    })
}
