use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;

use tally::config::{paths::TallyPaths, settings::Settings};
use tally::session::Session;

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Terminal-based session income and expense tracker",
    long_about = "tally keeps an in-memory ledger of income and expense \
                  transactions for one session, with summary totals, a \
                  category breakdown, month filtering, and CSV/PDF export. \
                  The ledger is discarded when the session ends."
)]
struct Cli {
    /// Currency symbol used in display output
    #[arg(long)]
    currency: Option<String>,

    /// Directory exports are written to when no path is given
    #[arg(long, value_name = "DIR")]
    export_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = TallyPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    if let Some(currency) = cli.currency {
        settings.currency_symbol = currency;
    }
    if let Some(dir) = cli.export_dir {
        settings.default_export_dir = Some(dir);
    }

    let mut session = Session::new(settings);
    let stdin = io::stdin();
    tally::shell::run(&mut session, stdin.lock(), io::stdout())?;

    Ok(())
}
