//! CLI commands for snapshot export and import

use std::path::Path;

use crate::error::LedgerResult;
use crate::export::{export_to_file, import_from_file};
use crate::storage::LedgerStore;

/// Write the current snapshot to `path`
pub fn handle_export_command(store: &LedgerStore, path: &Path) -> LedgerResult<()> {
    let ledger = store.load()?;
    export_to_file(&ledger, path)?;
    println!(
        "Exported {} transaction(s) to: {}",
        ledger.transactions.len(),
        path.display()
    );
    Ok(())
}

/// Replace the stored ledger with the snapshot at `path`
///
/// The stored ledger is untouched unless the whole document validates.
pub fn handle_import_command(store: &LedgerStore, path: &Path) -> LedgerResult<()> {
    let ledger = import_from_file(path, &store.default_storage_path())?;
    store.save(&ledger)?;
    println!(
        "Imported {} categor(ies) and {} transaction(s) from: {}",
        ledger.config.categories.len(),
        ledger.transactions.len(),
        path.display()
    );
    Ok(())
}
