use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::state::AppState;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, muted};
use crate::ui::view::render_metrics;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { all, top } = cmd {
        let pool = DbPool::open(&cfg.database)?;
        let state = AppState::load(&pool)?;

        if state.dataset().is_empty() {
            info("No data stored yet. Run `rtaboard process <performance.csv> <status.csv>` first.");
            return Ok(());
        }

        let mut rows = if *all {
            state.dataset().iter().collect::<Vec<_>>()
        } else {
            state.visible()
        };

        if let Some(n) = top {
            rows.truncate(*n);
        }

        header("Agent summary");

        if rows.is_empty() {
            info("Every agent in the dataset is on leave.");
        } else {
            print!("{}", render_metrics(&rows));
            println!();
        }

        let hidden = state.dataset().len() - state.visible().len();
        if !*all && hidden > 0 {
            muted(format!("{hidden} agent(s) on leave hidden (use --all to include them)"));
        }

        if let Some(ts) = state.last_updated() {
            muted(format!("Last updated: {ts}"));
        }
    }

    Ok(())
}
