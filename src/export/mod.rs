//! Export module for FinanceLab
//!
//! - JSON: the full snapshot, importable again
//! - CSV: the monthly series, for spreadsheets

pub mod csv;
pub mod json;

pub use self::csv::create_csv_file;
pub use json::{export_snapshot, export_to_file, import_from_file, import_snapshot};
