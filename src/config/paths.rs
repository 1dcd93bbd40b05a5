//! Path management for FinanceLab
//!
//! Resolves where the application keeps its own files and where a fresh
//! ledger stores backups and attachments.
//!
//! ## Path Resolution Order
//!
//! 1. `FINANCELAB_DATA_DIR` environment variable (if set)
//! 2. The platform data directory reported by `directories`
//!    (`~/.local/share/FinanceLab`, `~/Library/Application Support/FinanceLab`,
//!    `%APPDATA%\FinanceLab\data`)

use std::path::{Path, PathBuf};

use directories::{ProjectDirs, UserDirs};

use crate::error::LedgerError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "FINANCELAB_DATA_DIR";

/// Folder name used under the platform directories
const APP_DIR_NAME: &str = "FinanceLab";

/// Manages all paths used by FinanceLab
#[derive(Debug, Clone)]
pub struct LedgerPaths {
    /// Base directory for all FinanceLab data
    base_dir: PathBuf,
}

impl LedgerPaths {
    /// Create a new LedgerPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and no
    /// override is set.
    pub fn new() -> Result<Self, LedgerError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create LedgerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory holding the two ledger blobs
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("settings.json")
    }

    /// Get the path to ledger.json (configuration blob)
    pub fn ledger_file(&self) -> PathBuf {
        self.data_dir().join("ledger.json")
    }

    /// Get the path to transactions.json (transaction log blob)
    pub fn transactions_file(&self) -> PathBuf {
        self.data_dir().join("transactions.json")
    }

    /// Storage path given to a fresh ledger: `<Documents>/FinanceLab`
    ///
    /// Falls back to `<base>/FinanceLab` on hosts without a documents folder.
    pub fn default_storage_path(&self) -> PathBuf {
        UserDirs::new()
            .and_then(|dirs| dirs.document_dir().map(|d| d.join(APP_DIR_NAME)))
            .unwrap_or_else(|| self.base_dir.join(APP_DIR_NAME))
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), LedgerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| LedgerError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| LedgerError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if FinanceLab has been initialized (ledger file exists)
    pub fn is_initialized(&self) -> bool {
        self.ledger_file().exists()
    }
}

/// Create `path` and every missing parent
pub fn ensure_backup_dir(path: &Path) -> Result<(), LedgerError> {
    std::fs::create_dir_all(path).map_err(|e| {
        LedgerError::Io(format!(
            "Failed to create backup directory {}: {}",
            path.display(),
            e
        ))
    })
}

/// Resolve the default data directory path based on platform
fn resolve_default_path() -> Result<PathBuf, LedgerError> {
    ProjectDirs::from("", "", APP_DIR_NAME)
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| LedgerError::Config("Could not determine home directory".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().join("fresh"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(paths.data_dir().exists());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("settings.json"));
        assert_eq!(
            paths.ledger_file(),
            temp_dir.path().join("data").join("ledger.json")
        );
        assert_eq!(
            paths.transactions_file(),
            temp_dir.path().join("data").join("transactions.json")
        );
    }

    #[test]
    fn test_default_storage_path_named_after_app() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        assert!(paths.default_storage_path().ends_with("FinanceLab"));
    }

    #[test]
    fn test_ensure_backup_dir_is_recursive() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b").join("backup_x");
        ensure_backup_dir(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
