//! FinanceLab - personal ledger aggregation engine
//!
//! A single balance tracked from a known baseline. Categories carry a flow
//! type that decides whether their transactions add to the balance,
//! subtract from it, or are only kept as documents. From that the engine
//! derives the current balance, a monthly cumulative net-worth series and
//! a per-category monthly comparison.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Core data types (money, categories, transactions, the ledger snapshot)
//! - `services`: Pure snapshot-in, snapshot-out operations
//! - `reports`: Derived views of a snapshot
//! - `storage`: JSON persistence and the wire schema
//! - `export`: Snapshot import/export and CSV output
//! - `backup`: Backup folders under the storage path
//! - `config`: Paths and user settings
//! - `display`, `cli`: Terminal output and command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use financelab::config::paths::LedgerPaths;
//! use financelab::reports::current_balance;
//! use financelab::storage::LedgerStore;
//!
//! let store = LedgerStore::new(LedgerPaths::new()?)?;
//! let ledger = store.load()?;
//! println!("{}", current_balance(&ledger.config, &ledger.transactions));
//! ```

pub mod backup;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
