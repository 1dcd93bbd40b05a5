//! Display formatting for terminal output
//!
//! Plain-text tables for the CLI. Reports format themselves; this module
//! covers the ledger's own data.

pub mod category;
pub mod ledger;
pub mod transaction;

pub use category::format_category_list;
pub use ledger::{format_config, format_year_list};
pub use transaction::{attachment_path, format_amount, format_transaction_list};
