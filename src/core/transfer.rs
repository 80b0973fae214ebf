//! JSON export/import of the whole checklist through files.

use crate::core::{ImportSummary, SqliteStore, record};
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use crate::utils::prompt::ensure_writable;
use std::fs;
use std::io;
use std::path::PathBuf;

pub struct TransferLogic;

impl TransferLogic {
    /// Write the pretty-printed store root to `file`.
    ///
    /// Returns `None` when there is nothing to export (no items and no user
    /// groups).
    pub fn export(store: &SqliteStore, file: &str, force: bool) -> AppResult<Option<PathBuf>> {
        if store.is_empty() {
            return Ok(None);
        }

        let path = expand_tilde(file);
        ensure_writable(&path, force)?;

        let json = store.export_snapshot()?;
        fs::write(&path, json)?;

        record(
            store,
            "export",
            &path.to_string_lossy(),
            &format!(
                "Exported {} groups, {} items",
                store.groups().len(),
                store.total_items()
            ),
        );
        Ok(Some(path))
    }

    /// Replace the store with the document in `file`.
    ///
    /// The file is read completely before anything is applied, so a
    /// malformed document leaves the store untouched.
    pub fn import(store: &mut SqliteStore, file: &str) -> AppResult<ImportSummary> {
        let path = expand_tilde(file);
        let raw = fs::read_to_string(&path).map_err(|e| match e.kind() {
            io::ErrorKind::InvalidData => AppError::Import(format!("not UTF-8 text ({e})")),
            _ => AppError::from(e),
        })?;

        let summary = store.import_snapshot(&raw)?;

        record(
            store,
            "import",
            &path.to_string_lossy(),
            &format!(
                "Imported {} groups, {} items{}",
                summary.groups,
                summary.items,
                if summary.legacy { " (legacy format)" } else { "" }
            ),
        );
        Ok(summary)
    }
}
