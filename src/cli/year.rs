//! Year CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::ledger::format_year_list;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Ledger, Year};
use crate::services::years::{active_years, add_year, is_active, remove_year};
use crate::storage::LedgerStore;

/// Year subcommands
#[derive(Subcommand)]
pub enum YearCommands {
    /// List active years, newest first
    List,

    /// Register a year (4 digits, e.g. 2027) and select it
    Add {
        year: String,
    },

    /// Unregister a year that has no transactions
    Remove {
        year: String,
    },

    /// Make a year the default for reports and listings
    Select {
        year: String,
    },
}

/// Resolve the year a per-year command runs for
///
/// An explicit argument wins, then the selected year, then the newest
/// active year. The result must be in the registry.
pub fn resolve_year(
    ledger: &Ledger,
    settings: &Settings,
    arg: Option<&str>,
) -> LedgerResult<Year> {
    let years = active_years(&ledger.config, &ledger.transactions);

    let year = match arg {
        Some(raw) => Year::parse(raw.trim())?,
        None => match settings.selected_year().filter(|y| years.contains(y)) {
            Some(year) => year,
            None => *years
                .first()
                .ok_or_else(|| LedgerError::year_not_found("(no active years)"))?,
        },
    };

    if !is_active(&ledger.config, &ledger.transactions, year) {
        return Err(LedgerError::year_not_found(year.to_string()));
    }
    Ok(year)
}

/// Handle a year command
pub fn handle_year_command(
    store: &LedgerStore,
    settings: &mut Settings,
    cmd: YearCommands,
) -> LedgerResult<()> {
    let ledger = store.load()?;

    match cmd {
        YearCommands::List => {
            let years = active_years(&ledger.config, &ledger.transactions);
            print!(
                "{}",
                format_year_list(&years, &ledger.transactions, settings.selected_year())
            );
        }

        YearCommands::Add { year } => {
            let config = add_year(&ledger.config, year.trim())?;
            let added = config.active_years.len() != ledger.config.active_years.len();
            let year = Year::parse(year.trim())?;
            store.save(&ledger.with_config(config))?;
            settings.select_year(Some(year));
            settings.save(store.paths())?;
            if added {
                println!("Added year: {}", year);
            } else {
                println!("Year {} is already active.", year);
            }
            println!("Selected year: {}", year);
        }

        YearCommands::Remove { year } => {
            let year = Year::parse(year.trim())?;
            let removal = remove_year(
                &ledger.config,
                &ledger.transactions,
                year,
                settings.selected_year(),
            )?;
            store.save(&ledger.with_config(removal.config))?;
            println!("Removed year: {}", year);

            if removal.fallback_to_overview {
                settings.select_year(None);
                settings.save(store.paths())?;
                println!(
                    "{} was the selected year; reports fall back to the newest year.",
                    year
                );
            }
        }

        YearCommands::Select { year } => {
            let year = resolve_year(&ledger, settings, Some(&year))?;
            settings.select_year(Some(year));
            settings.save(store.paths())?;
            println!("Selected year: {}", year);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LedgerConfig, Money, Transaction, TransactionId};
    use chrono::NaiveDate;

    fn ledger() -> Ledger {
        Ledger::new(
            LedgerConfig::with_storage_path("/tmp"),
            vec![Transaction::new(
                TransactionId::new(1),
                Money::from_units(5),
                "affitto",
                NaiveDate::from_ymd_opt(2019, 5, 1).unwrap(),
            )],
        )
    }

    #[test]
    fn test_resolve_defaults_to_newest_year() {
        let year = resolve_year(&ledger(), &Settings::default(), None).unwrap();
        assert_eq!(year.value(), 2026);
    }

    #[test]
    fn test_resolve_prefers_selected_year() {
        let mut settings = Settings::default();
        settings.select_year(Year::parse("2025").ok());
        assert_eq!(resolve_year(&ledger(), &settings, None).unwrap().value(), 2025);
    }

    #[test]
    fn test_resolve_accepts_transaction_years() {
        let year = resolve_year(&ledger(), &Settings::default(), Some("2019")).unwrap();
        assert_eq!(year.value(), 2019);
    }

    #[test]
    fn test_resolve_rejects_inactive_and_malformed() {
        let settings = Settings::default();
        assert!(resolve_year(&ledger(), &settings, Some("2031"))
            .unwrap_err()
            .is_not_found());
        assert!(matches!(
            resolve_year(&ledger(), &settings, Some("31")),
            Err(LedgerError::InvalidFormat(_))
        ));
    }
}
