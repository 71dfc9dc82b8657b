//! Interactive session shell
//!
//! Reads line commands from the input, applies each one to the session, and
//! writes the result to the output. Commands run strictly one at a time;
//! every command recomputes its view from the current ledger snapshot.
//! Rejected input is reported and the loop continues.

pub mod command;

pub use command::ShellCommand;

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::display;
use crate::error::{TallyError, TallyResult};
use crate::export;
use crate::session::Session;

/// Run the shell until end of input or `quit`
pub fn run<R: BufRead, W: Write>(session: &mut Session, input: R, mut output: W) -> TallyResult<()> {
    writeln!(output, "tally - session income and expense tracker")?;
    writeln!(output, "Type 'help' for available commands.")?;

    for line in input.lines() {
        let line = line?;
        match ShellCommand::parse(&line) {
            Ok(None) => continue,
            Ok(Some(ShellCommand::Quit)) => break,
            Ok(Some(command)) => {
                if let Err(err) = execute(session, command, &mut output) {
                    writeln!(output, "error: {}", err)?;
                }
            }
            Err(err) => writeln!(output, "error: {}", err)?,
        }
    }

    writeln!(output, "Session ended; ledger discarded.")?;
    Ok(())
}

fn execute<W: Write>(session: &mut Session, command: ShellCommand, output: &mut W) -> TallyResult<()> {
    let currency = session.settings().currency_symbol.clone();
    let date_format = session.settings().date_format.clone();

    match command {
        ShellCommand::Add {
            kind,
            category,
            amount,
            date,
        } => {
            let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());
            session.add_transaction(date, kind, category, amount)?;
            writeln!(output, "Transaction added.")?;
        }
        ShellCommand::List => {
            write!(
                output,
                "{}",
                display::format_register(session.transactions(), &currency, &date_format)
            )?;
        }
        ShellCommand::Summary => {
            write!(output, "{}", display::format_summary(&session.summary(), &currency))?;
        }
        ShellCommand::Breakdown => {
            write!(
                output,
                "{}",
                display::format_breakdown(&session.category_breakdown(), &currency)
            )?;
        }
        ShellCommand::Months => {
            write!(output, "{}", display::format_months(&session.available_months()))?;
        }
        ShellCommand::Month(month) => {
            let transactions = session.transactions_for_month(month);
            writeln!(output, "Transactions for {}:", month)?;
            write!(
                output,
                "{}",
                display::format_register(&transactions, &currency, &date_format)
            )?;
        }
        ShellCommand::ExportCsv(path) => {
            let bytes = session.export_csv()?;
            let path = export_path(session, path, export::CSV_FILE_NAME);
            write_export(&path, &bytes)?;
            writeln!(
                output,
                "Exported {} transactions to: {}",
                session.transactions().len(),
                path.display()
            )?;
        }
        ShellCommand::ExportPdf(path) => {
            let bytes = session.export_pdf()?;
            let path = export_path(session, path, export::PDF_FILE_NAME);
            write_export(&path, &bytes)?;
            writeln!(
                output,
                "Exported {} transactions to: {}",
                session.transactions().len(),
                path.display()
            )?;
        }
        ShellCommand::Help => {
            write!(output, "{}", usage())?;
        }
        // Handled by the loop.
        ShellCommand::Quit => {}
    }

    Ok(())
}

/// Resolve where an export is written: explicit path, else the configured
/// export directory, else the working directory
fn export_path(session: &Session, explicit: Option<PathBuf>, file_name: &str) -> PathBuf {
    match explicit {
        Some(path) => path,
        None => match &session.settings().default_export_dir {
            Some(dir) => dir.join(file_name),
            None => PathBuf::from(file_name),
        },
    }
}

fn write_export(path: &Path, bytes: &[u8]) -> TallyResult<()> {
    std::fs::write(path, bytes)
        .map_err(|e| TallyError::Export(format!("Failed to write {}: {}", path.display(), e)))
}

fn usage() -> &'static str {
    "Commands:\n\
     \x20 add <income|expense> <category> <amount> [YYYY-MM-DD]\n\
     \x20 list                 show all transactions\n\
     \x20 summary              show income, expense, and balance totals\n\
     \x20 breakdown            show expense totals per category\n\
     \x20 months               list months available for filtering\n\
     \x20 month <YYYY-MM>      show transactions for one month\n\
     \x20 export csv [path]    write the ledger as CSV\n\
     \x20 export pdf [path]    write the ledger as PDF\n\
     \x20 help                 show this message\n\
     \x20 quit                 end the session\n"
}
