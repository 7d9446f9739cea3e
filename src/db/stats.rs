use crate::db::pool::DbPool;
use crate::db::snapshot;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) SNAPSHOT
    //
    match snapshot::load(pool)? {
        Some(snap) => {
            println!(
                "{}• Agents stored:{} {}{}{}",
                CYAN,
                RESET,
                GREEN,
                snap.rows.len(),
                RESET
            );
            println!(
                "{}• On leave:{} {}{}{}",
                CYAN,
                RESET,
                GREEN,
                snap.on_leave.len(),
                RESET
            );
            println!(
                "{}• Last updated:{} {}",
                CYAN,
                RESET,
                snap.last_updated.unwrap_or_else(|| format!("{GREY}--{RESET}"))
            );
        }
        None => {
            println!("{}• Snapshot:{} {}none stored yet{}", CYAN, RESET, GREY, RESET);
        }
    }

    //
    // 3) LOG ENTRIES
    //
    let count: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM log", [], |row| row.get(0))?;
    println!("{}• Log entries:{} {}", CYAN, RESET, count);

    println!();
    Ok(())
}
