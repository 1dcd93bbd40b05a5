//! CSV output files
//!
//! The series reports write their own rows; this opens the destination.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::{LedgerError, LedgerResult};

/// Create (or truncate) a CSV output file
pub fn create_csv_file(path: &Path) -> LedgerResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        LedgerError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Ledger, LedgerConfig, Year};
    use crate::reports::MonthlyNetWorthReport;
    use tempfile::TempDir;

    #[test]
    fn test_report_written_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("series.csv");
        let ledger = Ledger::new(LedgerConfig::with_storage_path("/tmp"), Vec::new());
        let report = MonthlyNetWorthReport::generate(&ledger, Year::parse("2024").unwrap());

        {
            let mut writer = create_csv_file(&path).unwrap();
            report.export_csv(&mut writer).unwrap();
        }

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 13);
        assert!(text.starts_with("Month,Label,Flow,Value"));
    }

    #[test]
    fn test_unwritable_path_is_export_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("series.csv");
        assert!(matches!(create_csv_file(&path), Err(LedgerError::Export(_))));
    }
}
