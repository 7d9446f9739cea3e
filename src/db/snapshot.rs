//! Persisted snapshot: full dataset, leave set and last-updated timestamp,
//! stored as one record and overwritten as a whole.

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::metrics::{Dataset, DerivedMetrics};
use chrono::Local;
use rusqlite::{OptionalExtension, params};
use serde_json::Value;

pub const SNAPSHOT_ID: &str = "agentPerformanceTable";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub rows: Dataset,
    pub on_leave: Vec<String>,
    pub last_updated: Option<String>,
}

/// Upsert the snapshot record inside a single transaction. Returns the
/// timestamp that was written.
pub fn save(
    pool: &mut DbPool,
    rows: &[DerivedMetrics],
    on_leave: &[String],
) -> AppResult<String> {
    let cells: Vec<Vec<Value>> = rows.iter().map(DerivedMetrics::to_cells).collect();
    let full_rows = serde_json::to_string(&cells)?;
    let leave = serde_json::to_string(on_leave)?;
    let now = Local::now().to_rfc3339();

    let tx = pool.conn.transaction()?;
    tx.execute(
        "INSERT INTO snapshot (id, full_rows, on_leave, last_updated)
         VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(id) DO UPDATE SET
            full_rows = excluded.full_rows,
            on_leave = excluded.on_leave,
            last_updated = excluded.last_updated",
        params![SNAPSHOT_ID, full_rows, leave, now],
    )?;
    tx.commit()?;

    log::debug!(
        "snapshot saved: {} rows, {} on leave",
        rows.len(),
        on_leave.len()
    );
    Ok(now)
}

/// Load the snapshot record; `None` when nothing has been stored yet.
pub fn load(pool: &DbPool) -> AppResult<Option<Snapshot>> {
    let record: Option<(String, String, String)> = pool
        .conn
        .query_row(
            "SELECT full_rows, on_leave, last_updated FROM snapshot WHERE id = ?1",
            [SNAPSHOT_ID],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )
        .optional()?;

    let Some((full_rows, on_leave, last_updated)) = record else {
        return Ok(None);
    };

    let cells: Vec<Vec<Value>> = serde_json::from_str(&full_rows)?;
    let rows = cells
        .iter()
        .map(|c| DerivedMetrics::from_cells(c))
        .collect::<AppResult<Dataset>>()?;
    let on_leave: Vec<String> = serde_json::from_str(&on_leave)?;

    Ok(Some(Snapshot {
        rows,
        on_leave,
        last_updated: Some(last_updated),
    }))
}
