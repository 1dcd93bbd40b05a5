//! Backup manager for FinanceLab
//!
//! Each backup is a folder `backup_<YYYY-MM-DD_HH-MM-SS>` directly under the
//! ledger's storage path, holding the snapshot as `snapshot.json`.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use tracing::{info, warn};

use crate::config::paths::ensure_backup_dir;
use crate::error::{LedgerError, LedgerResult};
use crate::models::Ledger;
use crate::storage::{write_json_atomic, WireSnapshot};

/// Prefix of every backup folder name
pub const BACKUP_PREFIX: &str = "backup_";

/// File holding the snapshot inside a backup folder
pub const SNAPSHOT_FILE: &str = "snapshot.json";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Metadata about a backup
#[derive(Debug, Clone)]
pub struct BackupInfo {
    /// Folder name
    pub name: String,
    /// Full path to the folder
    pub path: PathBuf,
    /// When the backup was created, local time
    pub created_at: NaiveDateTime,
}

/// Manages backup creation and retention
pub struct BackupManager {
    /// Storage path the backup folders live in
    root: PathBuf,
    /// Number of backups kept by `enforce_retention`
    keep: usize,
}

impl BackupManager {
    /// Create a new BackupManager
    pub fn new(root: impl Into<PathBuf>, keep: usize) -> Self {
        Self {
            root: root.into(),
            keep,
        }
    }

    /// Backup manager for the storage path configured in `ledger`
    pub fn for_ledger(ledger: &Ledger, keep: usize) -> Self {
        Self::new(&ledger.config.storage_path, keep)
    }

    /// Create a backup of `ledger` stamped with the current local time
    ///
    /// Returns the path to the created backup folder.
    pub fn create_backup(&self, ledger: &Ledger) -> LedgerResult<PathBuf> {
        self.create_backup_at(ledger, Local::now().naive_local())
    }

    /// Create a backup of `ledger` stamped with `timestamp`
    pub fn create_backup_at(
        &self,
        ledger: &Ledger,
        timestamp: NaiveDateTime,
    ) -> LedgerResult<PathBuf> {
        let stamp = timestamp.format(TIMESTAMP_FORMAT).to_string();
        let mut folder = self.root.join(format!("{}{}", BACKUP_PREFIX, stamp));
        // Two backups in the same second get a counter suffix
        let mut counter = 2;
        while folder.exists() {
            folder = self
                .root
                .join(format!("{}{}_{}", BACKUP_PREFIX, stamp, counter));
            counter += 1;
        }

        let result = ensure_backup_dir(&folder).and_then(|()| {
            write_json_atomic(folder.join(SNAPSHOT_FILE), &WireSnapshot::from_ledger(ledger))
        });
        if let Err(e) = result {
            warn!(path = %folder.display(), error = %e, "backup failed");
            return Err(e);
        }

        info!(path = %folder.display(), "created backup");
        Ok(folder)
    }

    /// List all available backups, newest first
    pub fn list_backups(&self) -> LedgerResult<Vec<BackupInfo>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut backups = Vec::new();

        for entry in fs::read_dir(&self.root)
            .map_err(|e| LedgerError::Io(format!("Failed to read storage directory: {}", e)))?
        {
            let entry = entry
                .map_err(|e| LedgerError::Io(format!("Failed to read directory entry: {}", e)))?;

            let path = entry.path();
            if path.is_dir() {
                if let Some(info) = parse_backup_info(&path) {
                    backups.push(info);
                }
            }
        }

        backups.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.name.cmp(&a.name))
        });

        Ok(backups)
    }

    /// Delete the oldest backups beyond the retention count
    pub fn enforce_retention(&self) -> LedgerResult<Vec<PathBuf>> {
        let mut deleted = Vec::new();

        for backup in self.list_backups()?.into_iter().skip(self.keep) {
            fs::remove_dir_all(&backup.path).map_err(|e| {
                LedgerError::Io(format!("Failed to delete old backup {}: {}", backup.name, e))
            })?;
            deleted.push(backup.path);
        }

        if !deleted.is_empty() {
            info!(deleted = deleted.len(), keep = self.keep, "pruned backups");
        }
        Ok(deleted)
    }

    /// Get the storage path backups are written to
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the most recent backup
    pub fn get_latest_backup(&self) -> LedgerResult<Option<BackupInfo>> {
        Ok(self.list_backups()?.into_iter().next())
    }
}

/// Parse backup info from a folder name: backup_YYYY-MM-DD_HH-MM-SS[_N]
fn parse_backup_info(path: &Path) -> Option<BackupInfo> {
    let name = path.file_name()?.to_string_lossy().to_string();
    let rest = name.strip_prefix(BACKUP_PREFIX)?;

    // Strip the collision counter, if any
    let stamp = rest.get(..19)?;
    let suffix = &rest[19..];
    let counter_ok = suffix
        .strip_prefix('_')
        .is_some_and(|n| n.parse::<u32>().is_ok());
    if !(suffix.is_empty() || counter_ok) {
        return None;
    }

    let created_at = NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT).ok()?;

    Some(BackupInfo {
        name,
        path: path.to_path_buf(),
        created_at,
    })
}
