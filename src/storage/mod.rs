//! Durable key/value storage used by the checklist store.
//!
//! The store only ever reads and writes whole values under a handful of fixed
//! keys, so any backend able to keep strings across restarts will do.

mod memory;

pub use memory::MemoryKv;

use crate::errors::AppResult;

/// Store root (groups and items), JSON.
pub const ROOT_KEY: &str = "redDeath";
/// Flat status list, JSON.
pub const STATUSES_KEY: &str = "redDeathStatuses";
/// Two-letter language code, JSON string.
pub const LANGUAGE_KEY: &str = "language";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;

    fn remove(&mut self, key: &str) -> AppResult<()>;

    /// Write several values as one unit.
    ///
    /// Backends that can do better than sequential writes (e.g. a single
    /// transaction) should override this.
    fn set_many(&mut self, entries: &[(&str, String)]) -> AppResult<()> {
        for (key, value) in entries {
            self.set(key, value)?;
        }
        Ok(())
    }
}
