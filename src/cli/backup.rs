//! Backup CLI commands
//!
//! Implements CLI commands for backup management.

use chrono::Local;
use clap::Subcommand;

use crate::backup::BackupManager;
use crate::config::settings::Settings;
use crate::error::LedgerResult;
use crate::storage::LedgerStore;

/// Backup subcommands
#[derive(Subcommand)]
pub enum BackupCommands {
    /// Create a backup folder under the storage path
    Create,

    /// List all available backups, newest first
    List,

    /// Delete old backups beyond the retention count
    Prune {
        /// Number of backups to keep (defaults to the backup_keep setting)
        #[arg(short, long)]
        keep: Option<usize>,
    },
}

/// Handle a backup command
pub fn handle_backup_command(
    store: &LedgerStore,
    settings: &Settings,
    cmd: BackupCommands,
) -> LedgerResult<()> {
    let ledger = store.load()?;

    match cmd {
        BackupCommands::Create => {
            let manager = BackupManager::for_ledger(&ledger, settings.backup_keep);
            let backup_path = manager.create_backup(&ledger)?;
            println!("Backup created: {}", backup_path.display());
        }

        BackupCommands::List => {
            let manager = BackupManager::for_ledger(&ledger, settings.backup_keep);
            let backups = manager.list_backups()?;

            if backups.is_empty() {
                println!("No backups found in {}.", manager.root().display());
                println!("Create one with: financelab backup create");
                return Ok(());
            }

            println!("Available Backups");
            println!("=================");
            println!();

            let now = Local::now().naive_local();
            for (i, backup) in backups.iter().enumerate() {
                let age = format_duration(now.signed_duration_since(backup.created_at));
                println!("  {}. {} ({} ago)", i + 1, backup.name, age);
            }

            println!();
            println!("Total: {} backup(s)", backups.len());
        }

        BackupCommands::Prune { keep } => {
            let keep = keep.unwrap_or(settings.backup_keep);
            let manager = BackupManager::for_ledger(&ledger, keep);
            let deleted = manager.enforce_retention()?;

            if deleted.is_empty() {
                println!("Nothing to prune (keeping {}).", keep);
            } else {
                for path in &deleted {
                    println!("Deleted: {}", path.display());
                }
                println!("Pruned {} backup(s), kept {}.", deleted.len(), keep);
            }
            if let Some(latest) = manager.get_latest_backup()? {
                println!("Latest kept: {}", latest.name);
            }
        }
    }

    Ok(())
}

/// Format a duration in a human-readable way
fn format_duration(duration: chrono::Duration) -> String {
    let total_seconds = duration.num_seconds().max(0);

    if total_seconds < 60 {
        return format!("{}s", total_seconds);
    }

    let minutes = total_seconds / 60;
    if minutes < 60 {
        return format!("{}m", minutes);
    }

    let hours = minutes / 60;
    if hours < 24 {
        return format!("{}h", hours);
    }

    let days = hours / 24;
    if days < 30 {
        return format!("{}d", days);
    }

    format!("{}mo", days / 30)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(chrono::Duration::seconds(42)), "42s");
        assert_eq!(format_duration(chrono::Duration::minutes(90)), "1h");
        assert_eq!(format_duration(chrono::Duration::days(65)), "2mo");
        assert_eq!(format_duration(chrono::Duration::seconds(-5)), "0s");
    }
}
