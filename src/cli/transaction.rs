//! Transaction CLI commands

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::transaction::format_transaction_list;
use crate::error::{LedgerError, LedgerResult};
use crate::models::Money;
use crate::services::transaction::{
    default_entry_date, record_transaction, transactions_in_year, NewTransaction,
};
use crate::storage::LedgerStore;

use super::year::resolve_year;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a new transaction
    Add {
        /// Amount, always positive (e.g. "800" or "12,50")
        amount: String,
        /// Category name
        category: String,
        /// Transaction date (YYYY-MM-DD); defaults to January 1st of the year
        #[arg(short, long)]
        date: Option<String>,
        /// Year whose January 1st is the default date
        #[arg(short, long)]
        year: Option<String>,
        /// Free-text note
        #[arg(short, long, default_value = "")]
        note: String,
        /// Attachment file name, stored under <storage>/<year>/<category>/
        #[arg(short, long)]
        attachment: Option<String>,
    },

    /// List the transactions of a year, newest first
    List {
        /// Year (defaults to the selected or newest year)
        year: Option<String>,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    store: &LedgerStore,
    settings: &Settings,
    cmd: TransactionCommands,
) -> LedgerResult<()> {
    let ledger = store.load()?;

    match cmd {
        TransactionCommands::Add {
            amount,
            category,
            date,
            year,
            note,
            attachment,
        } => {
            let amount = Money::parse(&amount)
                .map_err(|e| LedgerError::Validation(format!("Invalid amount: {}", e)))?;

            let date = match date {
                Some(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
                    LedgerError::Validation(format!(
                        "Invalid date '{}'. Use YYYY-MM-DD (e.g., 2024-03-01)",
                        raw
                    ))
                })?,
                None => default_entry_date(resolve_year(&ledger, settings, year.as_deref())?)?,
            };

            let mut input = NewTransaction::new(amount, category, date);
            input.note = note;
            input.attachment = attachment;

            let transactions =
                record_transaction(&ledger.transactions, &ledger.config.categories, input)?;
            let recorded = transactions.last().cloned();
            store.save(&ledger.with_transactions(transactions))?;

            if let Some(txn) = recorded {
                println!("Recorded transaction #{}", txn.id);
                println!("  Date:     {}", txn.date);
                println!("  Category: {}", txn.category);
                println!(
                    "  Amount:   {}",
                    txn.amount.format_with_symbol(&settings.currency_symbol)
                );
            }
        }

        TransactionCommands::List { year } => {
            let year = resolve_year(&ledger, settings, year.as_deref())?;
            let listed = transactions_in_year(&ledger.transactions, year);
            println!("Transactions {}", year);
            println!();
            print!(
                "{}",
                format_transaction_list(&listed, &ledger.config, &settings.currency_symbol)
            );
        }
    }

    Ok(())
}
