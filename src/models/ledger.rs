//! Ledger configuration and the immutable ledger snapshot
//!
//! Every computation in the crate takes a [`Ledger`] by reference and every
//! mutation produces a new one. Callers hold the current snapshot and
//! replace it wholesale.

use chrono::NaiveDate;

use super::category::{default_categories, Category};
use super::money::Money;
use super::transaction::Transaction;
use super::year::Year;

/// Default theme color of a fresh ledger
pub const DEFAULT_THEME_COLOR: &str = "#4f46e5";

/// User-curated ledger configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerConfig {
    /// Known balance at `baseline_date`
    pub baseline_balance: Money,

    /// Transactions dated before this are left out of derived balances
    pub baseline_date: NaiveDate,

    /// Opaque to the engine
    pub theme_color: String,

    /// Directory holding backups and attachments; opaque to the engine
    pub storage_path: String,

    /// Ordered taxonomy, names unique
    pub categories: Vec<Category>,

    /// Years the user registered, independent of transaction dates
    pub active_years: Vec<Year>,
}

impl LedgerConfig {
    /// Configuration of a brand new ledger
    pub fn with_storage_path(storage_path: impl Into<String>) -> Self {
        Self {
            baseline_balance: Money::from_units(10_000),
            baseline_date: default_baseline_date(),
            theme_color: DEFAULT_THEME_COLOR.to_string(),
            storage_path: storage_path.into(),
            categories: default_categories(),
            active_years: [2026, 2025, 2024]
                .into_iter()
                .filter_map(|y| Year::new(y).ok())
                .collect(),
        }
    }
}

/// January 1st 2024, the first day a fresh ledger tracks
pub fn default_baseline_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default()
}

/// A consistent snapshot of configuration and transaction log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    pub config: LedgerConfig,
    pub transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new(config: LedgerConfig, transactions: Vec<Transaction>) -> Self {
        Self {
            config,
            transactions,
        }
    }

    /// Replace the configuration, keeping the transaction log
    pub fn with_config(self, config: LedgerConfig) -> Self {
        Self { config, ..self }
    }

    /// Replace the transaction log, keeping the configuration
    pub fn with_transactions(self, transactions: Vec<Transaction>) -> Self {
        Self {
            transactions,
            ..self
        }
    }
}
