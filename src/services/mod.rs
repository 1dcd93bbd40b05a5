//! Service layer for FinanceLab
//!
//! Pure operations on ledger snapshots: each takes the current state by
//! reference and returns the replacement, leaving persistence to the caller.

pub mod taxonomy;
pub mod transaction;
pub mod years;

pub use taxonomy::{
    add_category, cycle_type, find_category, remove_category,
    resolve_category, set_type,
};
pub use transaction::{record_transaction, transactions_in_year, NewTransaction};
pub use years::{active_years, add_year, remove_year, YearRemoval};
