//! Backup system for FinanceLab
//!
//! Backups are plain folders under the ledger's storage path, one per
//! backup, each holding a full snapshot in the import/export format. Any
//! backup can be restored with `financelab import <folder>/snapshot.json`.
//!
//! Retention keeps the newest `backup_keep` folders (30 by default).

mod manager;

pub use manager::{BackupInfo, BackupManager, BACKUP_PREFIX, SNAPSHOT_FILE};
