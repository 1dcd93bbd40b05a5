//! CLI commands for reports
//!
//! Both series run for one active year and can be exported to CSV.

use clap::Subcommand;
use std::path::PathBuf;

use crate::config::Settings;
use crate::error::{LedgerError, LedgerResult};
use crate::export::create_csv_file;
use crate::reports::{CategoryComparisonReport, MonthlyNetWorthReport};
use crate::storage::LedgerStore;

use super::year::resolve_year;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Monthly cumulative net worth for a year
    #[command(alias = "networth")]
    NetWorth {
        /// Year (defaults to the selected or newest year)
        year: Option<String>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Raw monthly totals of selected categories for a year
    Compare {
        /// Year (defaults to the selected or newest year)
        year: Option<String>,

        /// Categories to compare
        #[arg(short, long = "category", required = true, num_args = 1..)]
        categories: Vec<String>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle report commands
pub fn handle_report_command(
    store: &LedgerStore,
    settings: &Settings,
    cmd: ReportCommands,
) -> LedgerResult<()> {
    let ledger = store.load()?;

    match cmd {
        ReportCommands::NetWorth { year, output } => {
            let year = resolve_year(&ledger, settings, year.as_deref())?;
            let report = MonthlyNetWorthReport::generate(&ledger, year);

            if let Some(path) = output {
                let mut writer = create_csv_file(&path)?;
                report.export_csv(&mut writer)?;
                println!("Net worth report exported to: {}", path.display());
            } else {
                print!(
                    "{}",
                    report.format_terminal(settings.month_labels, &settings.currency_symbol)
                );
            }
        }

        ReportCommands::Compare {
            year,
            categories,
            output,
        } => {
            let year = resolve_year(&ledger, settings, year.as_deref())?;
            let selected: Vec<String> = categories
                .iter()
                .map(|c| c.trim().to_lowercase())
                .filter(|c| !c.is_empty())
                .collect();
            if selected.is_empty() {
                return Err(LedgerError::Validation(
                    "Select at least one category with -c".into(),
                ));
            }

            let report = CategoryComparisonReport::generate(&ledger, year, &selected);

            if let Some(path) = output {
                let mut writer = create_csv_file(&path)?;
                report.export_csv(&mut writer)?;
                println!("Category comparison exported to: {}", path.display());
            } else {
                print!("{}", report.format_terminal(settings.month_labels));
            }
        }
    }

    Ok(())
}
