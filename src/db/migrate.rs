use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
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

/// Check whether a migration marker has already been written to `log`.
fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
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

/// Single-record store for the last computed dataset and the leave set.
fn migrate_create_snapshot_table(conn: &Connection) -> Result<()> {
    let version = "20251104_0001_create_snapshot";
    if migration_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS snapshot (
            id           TEXT PRIMARY KEY,
            full_rows    TEXT NOT NULL DEFAULT '[]',
            on_leave     TEXT NOT NULL DEFAULT '[]',
            last_updated TEXT NOT NULL
        );
        "#,
    )?;

    mark_applied(conn, version, "Created snapshot table")?;
    success(format!("Migration applied: {} → created 'snapshot' table", version));
    Ok(())
}

/// Index for `log --print` ordering by operation.
fn migrate_add_log_operation_index(conn: &Connection) -> Result<()> {
    let version = "20251118_0002_log_operation_index";
    if migration_applied(conn, version)? {
        return Ok(());
    }

    conn.execute_batch("CREATE INDEX IF NOT EXISTS idx_log_operation ON log(operation);")?;

    mark_applied(conn, version, "Added index on log.operation")?;
    success(format!("Migration applied: {} → indexed log.operation", version));
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    migrate_create_snapshot_table(conn)?;
    migrate_add_log_operation_index(conn)?;
    Ok(())
}
