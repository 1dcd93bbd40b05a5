//! Core data models for FinanceLab
//!
//! Categories, transactions, years, money and the ledger snapshot that ties
//! them together. These types carry no persistence concerns; the wire
//! schema lives in `storage::snapshot`.

pub mod category;
pub mod ledger;
pub mod money;
pub mod transaction;
pub mod year;

pub use category::{Category, FlowType};
pub use ledger::{Ledger, LedgerConfig};
pub use money::Money;
pub use transaction::{Transaction, TransactionId};
pub use year::Year;
