//! Storage layer for FinanceLab
//!
//! The ledger is persisted as two JSON blobs: the configuration in
//! `ledger.json` and the transaction log in `transactions.json`, both in
//! the wire schema of [`snapshot`]. Writes are atomic.

pub mod file_io;
pub mod snapshot;

pub use file_io::{read_json, write_json_atomic};
pub use snapshot::{WireConfig, WireSnapshot, WireTransaction};

use tracing::{debug, info};

use crate::config::paths::LedgerPaths;
use crate::error::{LedgerError, LedgerResult};
use crate::models::Ledger;

/// Loads and saves the ledger snapshot
pub struct LedgerStore {
    paths: LedgerPaths,
}

impl LedgerStore {
    /// Create a new LedgerStore, creating its directories if needed
    pub fn new(paths: LedgerPaths) -> LedgerResult<Self> {
        paths.ensure_directories()?;
        Ok(Self { paths })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &LedgerPaths {
        &self.paths
    }

    /// Storage path assigned when the stored one is missing or empty
    pub fn default_storage_path(&self) -> String {
        self.paths
            .default_storage_path()
            .to_string_lossy()
            .into_owned()
    }

    /// Check if a ledger has been saved before
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }

    /// Load the current snapshot
    ///
    /// Missing files yield a fresh ledger. Files that exist but do not hold
    /// a valid snapshot are an error.
    pub fn load(&self) -> LedgerResult<Ledger> {
        let ledger_file = self.paths.ledger_file();
        let wire_config: WireConfig = read_json(&ledger_file)?;
        let config = wire_config
            .into_config(&self.default_storage_path())
            .map_err(|e| LedgerError::Storage(format!("{}: {}", ledger_file.display(), e)))?;

        let transactions_file = self.paths.transactions_file();
        let wire_transactions: Vec<WireTransaction> = read_json(&transactions_file)?;
        let transactions = snapshot::transactions_from_wire(wire_transactions).map_err(|e| {
            LedgerError::Storage(format!("{}: {}", transactions_file.display(), e))
        })?;

        debug!(
            categories = config.categories.len(),
            transactions = transactions.len(),
            "loaded ledger"
        );
        Ok(Ledger::new(config, transactions))
    }

    /// Persist `ledger`, replacing whatever was stored
    pub fn save(&self, ledger: &Ledger) -> LedgerResult<()> {
        write_json_atomic(
            self.paths.ledger_file(),
            &WireConfig::from_config(&ledger.config),
        )?;
        write_json_atomic(
            self.paths.transactions_file(),
            &snapshot::transactions_to_wire(&ledger.transactions),
        )?;

        info!(transactions = ledger.transactions.len(), "saved ledger");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Transaction, TransactionId};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn store() -> (LedgerStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        (LedgerStore::new(paths).unwrap(), temp_dir)
    }

    #[test]
    fn test_fresh_store_loads_defaults() {
        let (store, _temp) = store();
        assert!(!store.is_initialized());

        let ledger = store.load().unwrap();
        assert_eq!(ledger.config.baseline_balance, Money::from_units(10_000));
        assert_eq!(ledger.config.storage_path, store.default_storage_path());
        assert!(ledger.transactions.is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let (store, _temp) = store();

        let mut ledger = store.load().unwrap();
        ledger.config.baseline_balance = Money::from_cents(123_45);
        ledger.transactions.push(Transaction::new(
            TransactionId::new(42),
            Money::from_units(800),
            "affitto",
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        ));
        store.save(&ledger).unwrap();
        assert!(store.is_initialized());

        let loaded = store.load().unwrap();
        assert_eq!(loaded, ledger);
    }

    #[test]
    fn test_corrupt_transactions_file_is_an_error() {
        let (store, _temp) = store();
        std::fs::write(
            store.paths().transactions_file(),
            r#"[{"id": 1, "importo": 5, "categoria": "x", "data": "yesterday"}]"#,
        )
        .unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, LedgerError::Storage(_)));
    }
}
