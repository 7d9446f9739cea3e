use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::lock::RunLock;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::{info as info_msg, success};
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        check,
        vacuum,
        info,
        unlock,
    } = cmd
    {
        if *unlock {
            let owner = RunLock::owner(&cfg.database);
            if RunLock::force_release(&cfg.database)? {
                match owner {
                    Some(pid) => success(format!("Run lock removed (held by process {}).", pid)),
                    None => success("Run lock removed."),
                }
            } else {
                info_msg("No run lock present.");
            }
        }

        if !(*check || *vacuum || *info) {
            return Ok(());
        }

        // opening runs any pending migration
        let mut pool = DbPool::open(&cfg.database)?;

        //
        // 1) INFO
        //
        if *info {
            stats::print_db_info(&mut pool, &cfg.database)?;
        }

        //
        // 2) CHECK
        //
        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String = pool
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed:{} {}\n", RED, RESET, integrity);
            }
        }

        //
        // 3) VACUUM
        //
        if *vacuum {
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);
            pool.conn.execute_batch("VACUUM;")?;
            println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
        }
    }

    Ok(())
}
