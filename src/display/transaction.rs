//! Transaction display formatting
//!
//! Amounts are shown with the sign their category gives them. Transactions
//! filed under a Neutral category are documents rather than money, so they
//! show `FILE` instead. A transaction whose category was removed is marked
//! with `?`.

use std::path::PathBuf;

use crate::models::{FlowType, LedgerConfig, Transaction};
use crate::services::taxonomy::find_category;

/// Where the attachment of `txn` lives: `<storage>/<year>/<category>/<file>`
pub fn attachment_path(storage_path: &str, txn: &Transaction) -> Option<PathBuf> {
    let attachment = txn.attachment.as_deref()?;
    Some(
        PathBuf::from(storage_path)
            .join(txn.year().to_string())
            .join(&txn.category)
            .join(attachment),
    )
}

/// Format the amount column of a transaction
pub fn format_amount(txn: &Transaction, config: &LedgerConfig, currency_symbol: &str) -> String {
    let amount = txn.amount.format_with_symbol(currency_symbol);
    match find_category(&config.categories, &txn.category).map(|c| c.flow_type) {
        Some(FlowType::Neutral) => "FILE".to_string(),
        Some(FlowType::Income) => format!("+{}", amount),
        Some(FlowType::Expense) => format!("-{}", amount),
        None => format!("?{}", amount),
    }
}

/// Format a single transaction for display (listing row)
pub fn format_transaction_row(
    txn: &Transaction,
    config: &LedgerConfig,
    currency_symbol: &str,
) -> String {
    format!(
        "{} {:<16} {:>16}  #{}",
        txn.date.format("%Y-%m-%d"),
        truncate(&txn.category, 16),
        format_amount(txn, config, currency_symbol),
        txn.id
    )
}

/// Format a year's transactions, note and attachment path under each row
pub fn format_transaction_list(
    transactions: &[&Transaction],
    config: &LedgerConfig,
    currency_symbol: &str,
) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {:<16} {:>16}  {}\n",
        "Date", "Category", "Amount", "Id"
    ));
    output.push_str(&"-".repeat(62));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, config, currency_symbol));
        output.push('\n');
        if !txn.note.is_empty() {
            output.push_str(&format!("           {}\n", txn.note));
        }
        if let Some(path) = attachment_path(&config.storage_path, txn) {
            output.push_str(&format!("           📎 {}\n", path.display()));
        }
    }

    output
}

/// Truncate a string to a maximum length, adding ellipsis if needed
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        format!("{}...", s.chars().take(max_len - 3).collect::<String>())
    }
}
