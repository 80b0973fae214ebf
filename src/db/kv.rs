//! SQLite-backed key/value storage.

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::storage::KeyValueStore;
use chrono::Local;
use rusqlite::{OptionalExtension, params};

pub struct SqliteKv {
    pool: DbPool,
}

impl SqliteKv {
    /// Wrap an already migrated pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// All stored keys, sorted.
    pub fn keys(&self) -> AppResult<Vec<String>> {
        let mut stmt = self.pool.conn.prepare("SELECT key FROM kv ORDER BY key ASC")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut keys = Vec::new();
        for r in rows {
            keys.push(r?);
        }
        Ok(keys)
    }
}

const UPSERT: &str = "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";

impl KeyValueStore for SqliteKv {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let value = self
            .pool
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        let now = Local::now().to_rfc3339();
        self.pool
            .conn
            .prepare_cached(UPSERT)?
            .execute(params![key, value, now])?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.pool.conn.execute("DELETE FROM kv WHERE key = ?1", [key])?;
        Ok(())
    }

    fn set_many(&mut self, entries: &[(&str, String)]) -> AppResult<()> {
        let now = Local::now().to_rfc3339();
        self.pool.with_conn(|conn| {
            let tx = conn.transaction()?;
            {
                let mut stmt = tx.prepare_cached(UPSERT)?;
                for (key, value) in entries {
                    stmt.execute(params![key, value, now])?;
                }
            }
            tx.commit()
        })?;
        Ok(())
    }
}
