use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::process::ProcessLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{muted, success};
use crate::ui::view::render_metrics;
use crate::utils::secs2readable;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Process {
        performance,
        status,
        skip_name_check,
        quiet,
    } = cmd
    {
        let mut pool = DbPool::open(&cfg.database)?;
        let state = ProcessLogic::run(&mut pool, cfg, performance, status, *skip_name_check)?;

        let visible = state.visible();

        success(format!(
            "Processed {} agent(s), {} shown, {} on leave.",
            state.dataset().len(),
            visible.len(),
            state.leave().len()
        ));

        if let Some(worst) = visible.first() {
            muted(format!(
                "Most non-productive: {} ({})",
                worst.agent_name,
                secs2readable(worst.non_productive)
            ));
        }

        if !*quiet {
            println!();
            print!("{}", render_metrics(&visible));
            println!();
        }

        if let Some(ts) = state.last_updated() {
            muted(format!("Last updated: {ts}"));
        }
    }

    Ok(())
}
