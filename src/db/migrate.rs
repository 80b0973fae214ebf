use crate::ui::messages::success;
use rusqlite::{Connection, Error, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `kv` table has the given column.
fn kv_has_column(conn: &Connection, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('kv')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

fn create_kv_table(conn: &Connection) -> Result<()> {
    let version = "20250301_0001_create_kv";
    if is_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv (
            key    TEXT PRIMARY KEY NOT NULL,
            value  TEXT NOT NULL
        );
        "#,
    )?;

    mark_applied(conn, version, "Created kv table")?;
    success(format!("Migration applied: {} → created 'kv' table", version));
    Ok(())
}

fn add_kv_updated_at(conn: &Connection) -> Result<()> {
    let version = "20250412_0002_add_kv_updated_at";
    if is_applied(conn, version)? {
        return Ok(());
    }

    if !kv_has_column(conn, "updated_at")? {
        conn.execute(
            "ALTER TABLE kv ADD COLUMN updated_at TEXT NOT NULL DEFAULT ''",
            [],
        )
        .map_err(|e| {
            Error::SqliteFailure(
                rusqlite::ffi::Error::new(1),
                Some(format!("Failed to add 'updated_at' column: {}", e)),
            )
        })?;
    }

    mark_applied(conn, version, "Added updated_at to kv")?;
    success(format!(
        "Migration applied: {} → added 'updated_at' to kv table",
        version
    ));
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    create_kv_table(conn)?;
    add_kv_updated_at(conn)?;
    Ok(())
}
