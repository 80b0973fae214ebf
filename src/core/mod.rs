pub mod backup;
pub mod dnd;
pub mod filter;
pub mod ids;
pub mod list;
pub mod log;
pub mod migrate;
pub mod store;
pub mod transfer;

pub use dnd::{DropTarget, MoveOutcome, resolve_target};
pub use filter::ItemFilter;
pub use store::{ChecklistStore, ImportSummary, Progress, RootSource, StatusSource};

use crate::db::initialize::open_db;
use crate::db::kv::SqliteKv;
use crate::db::log::ttlog;
use crate::errors::AppResult;
use crate::i18n::texts;
use crate::storage::{ROOT_KEY, STATUSES_KEY};
use crate::ui::messages::warning;

pub type SqliteStore = ChecklistStore<SqliteKv>;

/// Open (and migrate) the database at `db_path` and load the store from it.
///
/// Anything repaired or discarded while loading is reported and logged.
pub fn open_store(db_path: &str) -> AppResult<SqliteStore> {
    let pool = open_db(db_path)?;
    let store = ChecklistStore::open(SqliteKv::new(pool))?;
    let t = texts(store.language()?);

    match store.source() {
        RootSource::MigratedLegacy => {
            warning(t.legacy_upgraded);
            record(&store, "migrate_legacy", ROOT_KEY, "Upgraded legacy store to groups");
        }
        RootSource::Unreadable(reason) => {
            warning(format!("{} ({reason})", t.root_unreadable));
            record(&store, "load_error", ROOT_KEY, reason);
        }
        RootSource::Seeded | RootSource::Current => {}
    }

    match store.status_source() {
        StatusSource::Partial { dropped } => {
            warning(format!("{}: {dropped}", t.statuses_partial));
            record(
                &store,
                "load_error",
                STATUSES_KEY,
                &format!("Skipped {dropped} unusable status entries"),
            );
        }
        StatusSource::Unreadable(reason) => {
            warning(format!("{} ({reason})", t.statuses_unreadable));
            record(&store, "load_error", STATUSES_KEY, reason);
        }
        StatusSource::Clean => {}
    }

    Ok(store)
}

/// Append a line to the internal log (non blocking).
pub fn record(store: &SqliteStore, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(&store.backend().pool().conn, operation, target, message) {
        warning(format!("Failed to write internal log: {}", e));
    }
}
