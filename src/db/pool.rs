//! Single SQLite connection owned by one CLI invocation.

use rusqlite::{Connection, Result};
use std::path::Path;
use std::time::Duration;

/// How long a write waits on a database locked by another pcdeath process.
const BUSY_TIMEOUT: Duration = Duration::from_secs(3);

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(Self { conn })
    }

    /// Run `func` with exclusive access to the connection (transactions).
    pub fn with_conn<F, T>(&mut self, func: F) -> Result<T>
    where
        F: FnOnce(&mut Connection) -> Result<T>,
    {
        func(&mut self.conn)
    }
}
