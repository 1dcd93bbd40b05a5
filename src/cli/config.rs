//! Configuration CLI commands
//!
//! Ledger settings (baseline, theme, storage path) live in the ledger
//! snapshot; display preferences live in settings.json.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::ledger::format_config;
use crate::error::{LedgerError, LedgerResult};
use crate::models::Money;
use crate::reports::MonthLabels;
use crate::storage::LedgerStore;

/// Config subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the ledger configuration and preferences
    Show,

    /// Change one or more settings
    Set {
        /// Known balance at the baseline date
        #[arg(long)]
        baseline_balance: Option<String>,
        /// Baseline date (YYYY-MM-DD); earlier transactions are left out
        #[arg(long)]
        baseline_date: Option<String>,
        /// Theme color, e.g. "#4f46e5"
        #[arg(long)]
        theme_color: Option<String>,
        /// Folder for backups and attachments
        #[arg(long)]
        storage_path: Option<String>,
        /// Currency symbol shown in front of amounts
        #[arg(long)]
        currency_symbol: Option<String>,
        /// Month labels: english or italian
        #[arg(long, value_parser = parse_month_labels)]
        month_labels: Option<MonthLabels>,
        /// Number of backups kept by `backup prune`
        #[arg(long)]
        backup_keep: Option<usize>,
    },
}

fn parse_month_labels(s: &str) -> Result<MonthLabels, String> {
    match s.trim().to_lowercase().as_str() {
        "english" | "en" => Ok(MonthLabels::English),
        "italian" | "it" => Ok(MonthLabels::Italian),
        other => Err(format!("unknown month labels '{}' (english or italian)", other)),
    }
}

/// Handle a config command
pub fn handle_config_command(
    store: &LedgerStore,
    settings: &mut Settings,
    cmd: ConfigCommands,
) -> LedgerResult<()> {
    let ledger = store.load()?;

    match cmd {
        ConfigCommands::Show => {
            println!("FinanceLab Configuration");
            println!("========================");
            println!("Data directory:   {}", store.paths().base_dir().display());
            println!();
            print!("{}", format_config(&ledger.config, settings));
        }

        ConfigCommands::Set {
            baseline_balance,
            baseline_date,
            theme_color,
            storage_path,
            currency_symbol,
            month_labels,
            backup_keep,
        } => {
            let mut config = ledger.config.clone();
            let mut changed = Vec::new();

            if let Some(raw) = baseline_balance {
                config.baseline_balance = Money::parse(&raw).map_err(|e| {
                    LedgerError::Validation(format!("Invalid baseline balance: {}", e))
                })?;
                changed.push("baseline balance");
            }
            if let Some(raw) = baseline_date {
                config.baseline_date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
                    .map_err(|_| {
                        LedgerError::Validation(format!(
                            "Invalid baseline date '{}'. Use YYYY-MM-DD",
                            raw
                        ))
                    })?;
                changed.push("baseline date");
            }
            if let Some(color) = theme_color {
                config.theme_color = color;
                changed.push("theme color");
            }
            if let Some(path) = storage_path {
                if path.trim().is_empty() {
                    return Err(LedgerError::Validation("Storage path cannot be empty".into()));
                }
                config.storage_path = path;
                changed.push("storage path");
            }

            let mut settings_changed = false;
            if let Some(symbol) = currency_symbol {
                settings.currency_symbol = symbol;
                settings_changed = true;
                changed.push("currency symbol");
            }
            if let Some(labels) = month_labels {
                settings.month_labels = labels;
                settings_changed = true;
                changed.push("month labels");
            }
            if let Some(keep) = backup_keep {
                settings.backup_keep = keep;
                settings_changed = true;
                changed.push("backups kept");
            }

            if changed.is_empty() {
                println!("Nothing to change. See 'financelab config set --help'.");
                return Ok(());
            }

            if config != ledger.config {
                store.save(&ledger.with_config(config))?;
            }
            if settings_changed {
                settings.save(store.paths())?;
            }
            println!("Updated: {}", changed.join(", "));
        }
    }

    Ok(())
}
