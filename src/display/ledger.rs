//! Ledger configuration and year registry display

use crate::config::Settings;
use crate::models::{LedgerConfig, Transaction, Year};

/// Format the ledger configuration together with the display settings
pub fn format_config(config: &LedgerConfig, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Baseline balance: {}\n",
        config
            .baseline_balance
            .format_with_symbol(&settings.currency_symbol)
    ));
    output.push_str(&format!("Baseline date:    {}\n", config.baseline_date));
    output.push_str(&format!("Theme color:      {}\n", config.theme_color));
    output.push_str(&format!("Storage path:     {}\n", config.storage_path));
    output.push_str(&format!("Categories:       {}\n", config.categories.len()));
    output.push('\n');
    output.push_str(&format!("Currency symbol:  {}\n", settings.currency_symbol));
    output.push_str(&format!("Month labels:     {:?}\n", settings.month_labels));
    output.push_str(&format!("Backups kept:     {}\n", settings.backup_keep));
    if let Some(year) = settings.selected_year() {
        output.push_str(&format!("Selected year:    {}\n", year));
    }

    output
}

/// Format the year registry, newest first, with transaction counts
pub fn format_year_list(
    years: &[Year],
    transactions: &[Transaction],
    selected: Option<Year>,
) -> String {
    if years.is_empty() {
        return "No years registered.\n".to_string();
    }

    let mut output = String::new();
    for &year in years {
        let count = transactions.iter().filter(|t| t.is_in_year(year)).count();
        let marker = if Some(year) == selected { "*" } else { " " };
        output.push_str(&format!("{} {}  {:>5} transaction(s)\n", marker, year, count));
    }

    output
}
