//! JSON snapshot export and import
//!
//! The exported document is the persisted snapshot itself: `{config, spese}`.
//! Import never applies a partial document. Shape and every record are
//! checked first, and the current ledger is only replaced on success.

use std::fs;
use std::io::Write;
use std::path::Path;

use serde_json::Value;
use tracing::info;

use crate::error::{LedgerError, LedgerResult};
use crate::models::Ledger;
use crate::storage::WireSnapshot;

/// Export `ledger` as pretty-printed JSON
pub fn export_snapshot<W: Write>(ledger: &Ledger, writer: &mut W) -> LedgerResult<()> {
    serde_json::to_writer_pretty(&mut *writer, &WireSnapshot::from_ledger(ledger))
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    writer
        .write_all(b"\n")
        .map_err(|e| LedgerError::Export(e.to_string()))?;
    Ok(())
}

/// Export `ledger` to a file at `path`
pub fn export_to_file(ledger: &Ledger, path: &Path) -> LedgerResult<()> {
    let mut buffer = Vec::new();
    export_snapshot(ledger, &mut buffer)?;
    fs::write(path, buffer).map_err(|e| {
        LedgerError::Export(format!("Failed to write {}: {}", path.display(), e))
    })?;

    info!(path = %path.display(), transactions = ledger.transactions.len(), "exported snapshot");
    Ok(())
}

/// Check the top-level shape: a `config` object and a `spese` array
fn validate_shape(value: &Value) -> LedgerResult<()> {
    let Some(root) = value.as_object() else {
        return Err(LedgerError::Import("snapshot must be a JSON object".into()));
    };

    match root.get("config") {
        Some(Value::Object(_)) => {}
        Some(_) => return Err(LedgerError::Import("'config' must be an object".into())),
        None => return Err(LedgerError::Import("missing 'config'".into())),
    }

    match root.get("spese") {
        Some(Value::Array(_)) => Ok(()),
        Some(_) => Err(LedgerError::Import("'spese' must be an array".into())),
        None => Err(LedgerError::Import("missing 'spese'".into())),
    }
}

/// Parse and validate a snapshot document
///
/// An empty or missing storage path in the document is replaced by
/// `default_storage_path`.
pub fn import_snapshot(json_str: &str, default_storage_path: &str) -> LedgerResult<Ledger> {
    let value: Value = serde_json::from_str(json_str)
        .map_err(|e| LedgerError::Import(format!("not valid JSON: {}", e)))?;
    validate_shape(&value)?;

    let snapshot: WireSnapshot =
        serde_json::from_value(value).map_err(|e| LedgerError::Import(e.to_string()))?;

    snapshot.into_ledger(default_storage_path)
}

/// Read and validate a snapshot document from `path`
pub fn import_from_file(path: &Path, default_storage_path: &str) -> LedgerResult<Ledger> {
    let contents = fs::read_to_string(path).map_err(|e| {
        LedgerError::Import(format!("Failed to read {}: {}", path.display(), e))
    })?;
    import_snapshot(&contents, default_storage_path)
}
